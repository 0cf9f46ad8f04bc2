//! Selection of the packages shown in the "Popular Destinations" block.

use super::aggregate::FeaturedPackagesSection;
use crate::domain::a003_package::Package;
use crate::shared::{AdminError, AdminResult};

impl FeaturedPackagesSection {
    pub fn is_selected(&self, package_id: &str) -> bool {
        self.package_ids.iter().any(|id| id == package_id)
    }

    /// Checkbox behaviour: select at the end or deselect
    pub fn toggle(&mut self, package_id: &str) {
        if self.is_selected(package_id) {
            self.package_ids.retain(|id| id != package_id);
        } else {
            self.package_ids.push(package_id.to_string());
        }
    }

    /// Append a catalog package. Returns `false` if it was already featured.
    pub fn add(&mut self, package_id: &str, catalog: &[Package]) -> AdminResult<bool> {
        if !catalog.iter().any(|p| p.id == package_id) {
            return Err(AdminError::NotFound(format!("Package {}", package_id)));
        }
        if self.is_selected(package_id) {
            return Ok(false);
        }
        self.package_ids.push(package_id.to_string());
        Ok(true)
    }

    /// Returns `false` if the package was not featured
    pub fn remove(&mut self, package_id: &str) -> bool {
        let before = self.package_ids.len();
        self.package_ids.retain(|id| id != package_id);
        self.package_ids.len() != before
    }

    /// Replace the display order. `ordered` must be a permutation of the
    /// current selection.
    pub fn reorder(&mut self, ordered: Vec<String>) -> AdminResult<()> {
        let mut current = self.package_ids.clone();
        let mut next = ordered.clone();
        current.sort();
        next.sort();
        if current != next {
            return Err(AdminError::validation(
                "Reordered list must contain exactly the featured packages",
            ));
        }
        self.package_ids = ordered;
        Ok(())
    }

    /// Move one selected package up (`-1`) or down (`+1`)
    pub fn move_by(&mut self, package_id: &str, offset: isize) -> bool {
        let Some(from) = self.package_ids.iter().position(|id| id == package_id) else {
            return false;
        };
        let to = from as isize + offset;
        if to < 0 || to as usize >= self.package_ids.len() {
            return false;
        }
        self.package_ids.swap(from, to as usize);
        true
    }
}

/// Catalog entries for the selected ids in display order.
///
/// Ids that the catalog does not know are skipped.
pub fn resolve_featured<'a>(section: &FeaturedPackagesSection, catalog: &'a [Package]) -> Vec<&'a Package> {
    section
        .package_ids
        .iter()
        .filter_map(|id| catalog.iter().find(|p| &p.id == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Package> {
        vec![
            Package::new("bali-paradise-escape", "Bali Paradise Escape", "Bali, Indonesia"),
            Package::new("japan-cherry-blossom-tour", "Japan Cherry Blossom Tour", "Tokyo & Kyoto, Japan"),
            Package::new("swiss-alps-adventure", "Swiss Alps Adventure", "Interlaken, Switzerland"),
            Package::new("goa-beach-retreat", "Goa Beach Retreat", "Goa, India"),
        ]
    }

    fn section(ids: &[&str]) -> FeaturedPackagesSection {
        FeaturedPackagesSection {
            package_ids: ids.iter().map(|s| s.to_string()).collect(),
            ..FeaturedPackagesSection::default()
        }
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut s = section(&["bali-paradise-escape"]);
        s.toggle("goa-beach-retreat");
        assert_eq!(s.package_ids, vec!["bali-paradise-escape", "goa-beach-retreat"]);
        s.toggle("bali-paradise-escape");
        assert_eq!(s.package_ids, vec!["goa-beach-retreat"]);
    }

    #[test]
    fn add_requires_catalog_entry_and_is_idempotent() {
        let mut s = section(&[]);
        let catalog = catalog();
        assert!(s.add("goa-beach-retreat", &catalog).unwrap());
        assert!(!s.add("goa-beach-retreat", &catalog).unwrap());
        assert!(matches!(
            s.add("atlantis", &catalog),
            Err(AdminError::NotFound(_))
        ));
        assert_eq!(s.package_ids, vec!["goa-beach-retreat"]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut s = section(&["a", "b"]);
        assert!(s.remove("a"));
        assert!(!s.remove("a"));
        assert_eq!(s.package_ids, vec!["b"]);
    }

    #[test]
    fn reorder_accepts_only_permutations() {
        let mut s = section(&["a", "b", "c"]);
        s.reorder(vec!["c".into(), "a".into(), "b".into()]).unwrap();
        assert_eq!(s.package_ids, vec!["c", "a", "b"]);

        assert!(s.reorder(vec!["a".into(), "b".into()]).is_err());
        assert!(s.reorder(vec!["a".into(), "b".into(), "x".into()]).is_err());
        assert_eq!(s.package_ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn move_by_stays_in_bounds() {
        let mut s = section(&["a", "b", "c"]);
        assert!(s.move_by("c", -1));
        assert_eq!(s.package_ids, vec!["a", "c", "b"]);
        assert!(!s.move_by("a", -1));
        assert!(!s.move_by("b", 1));
        assert!(!s.move_by("zzz", 1));
    }

    #[test]
    fn resolve_keeps_selection_order_and_skips_unknown_ids() {
        let catalog = catalog();
        let s = section(&["swiss-alps-adventure", "1", "bali-paradise-escape"]);
        let titles: Vec<_> = resolve_featured(&s, &catalog)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Swiss Alps Adventure", "Bali Paradise Escape"]);
    }
}
