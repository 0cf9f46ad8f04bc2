use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::aggregate::MAX_RATING;
use contracts::domain::a002_homepage::{Testimonial, TestimonialsSection};
use leptos::prelude::*;

fn rating_options() -> Vec<(String, String)> {
    (1..=MAX_RATING)
        .rev()
        .map(|n| (n.to_string(), format!("{} stars", n)))
        .collect()
}

/// Rewrite one testimonial through `update_testimonial` so the rating
/// stays clamped.
fn patch(vm: SectionViewModel<TestimonialsSection>, index: usize, f: impl FnOnce(&mut Testimonial)) {
    vm.edit(|s| {
        if let Some(mut t) = s.testimonials.get(index).cloned() {
            f(&mut t);
            s.update_testimonial(index, t);
        }
    });
}

#[component]
fn TestimonialRow(vm: SectionViewModel<TestimonialsSection>, index: usize) -> impl IntoView {
    let locked = vm.locked();
    let read = move |pick: fn(&Testimonial) -> String| {
        Signal::derive(move || vm.with(|s| s.testimonials.get(index).map(pick).unwrap_or_default()))
    };

    view! {
        <div class="testimonial-editor">
            <div class="testimonial-editor__header">
                <span>{format!("Testimonial {}", index + 1)}</span>
                <Button
                    variant="ghost"
                    size="sm"
                    class="button--text-danger"
                    disabled=locked
                    on_click=Callback::new(move |_| vm.edit(|s| {
                        s.remove_testimonial(index);
                    }))
                >
                    {icon("trash")}
                    "Remove"
                </Button>
            </div>
            <div class="form__row">
                <Input
                    label="Name"
                    value=read(|t| t.name.clone())
                    on_input=Callback::new(move |v: String| patch(vm, index, |t| t.name = v))
                    disabled=locked
                />
                <Input
                    label="Role"
                    value=read(|t| t.role.clone())
                    on_input=Callback::new(move |v: String| patch(vm, index, |t| t.role = v))
                    disabled=locked
                />
            </div>
            <Textarea
                label="Content"
                value=read(|t| t.content.clone())
                on_input=Callback::new(move |v: String| patch(vm, index, |t| t.content = v))
                disabled=locked
            />
            <div class="form__row">
                <Select
                    label="Rating"
                    value=read(|t| t.rating.to_string())
                    options=Signal::derive(rating_options)
                    on_change=Callback::new(move |v: String| {
                        if let Ok(rating) = v.parse::<u8>() {
                            patch(vm, index, |t| t.rating = rating);
                        }
                    })
                    disabled=locked
                />
                <Input
                    label="Photo URL"
                    input_type="url"
                    value=read(|t| t.image.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| patch(vm, index, |t| {
                        t.image = (!v.trim().is_empty()).then_some(v);
                    }))
                    disabled=locked
                />
            </div>
        </div>
    }
}

#[component]
pub fn TestimonialsEditor(initial: TestimonialsSection) -> impl IntoView {
    let vm = SectionViewModel::new(initial, use_homepage_state(), use_notifications());
    let locked = vm.locked();
    let count = Memo::new(move |_| vm.with(|s| s.testimonials.len()));

    view! {
        <SectionCard vm=vm description="Customer quotes with star ratings">
            <div class="form">
                <Input
                    label="Title"
                    value=vm.field(|s| s.title.clone())
                    on_input=vm.setter(|s, v| s.title = v)
                    disabled=locked
                />
                <Textarea
                    label="Description"
                    value=vm.field(|s| s.description.clone())
                    on_input=vm.setter(|s, v| s.description = v)
                    disabled=locked
                />
                <div class="section-card__subheader">
                    <h4>{move || format!("Testimonials ({})", count.get())}</h4>
                    <Button
                        variant="secondary"
                        size="sm"
                        disabled=locked
                        on_click=Callback::new(move |_| vm.edit(|s| {
                            s.add_testimonial();
                        }))
                    >
                        {icon("plus")}
                        "Add Testimonial"
                    </Button>
                </div>
                {move || {
                    if count.get() == 0 {
                        return view! { <p class="empty-state">"No testimonials yet."</p> }.into_any();
                    }
                    (0..count.get())
                        .map(|index| view! { <TestimonialRow vm=vm index=index /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </SectionCard>
    }
}
