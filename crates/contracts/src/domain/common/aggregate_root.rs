/// Корень агрегата
///
/// Instance data plus the static names the admin panel uses for titles,
/// collection paths and log categories.
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    /// Display name of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Backend collection name (e.g. "destinations")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Destination")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Destinations")
    fn list_name() -> &'static str;

    /// Full name used for page ids and log categories (e.g. "a001_destinations")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
