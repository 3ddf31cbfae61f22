use super::AggregateId;

/// Trait for an aggregate root served by the REST backend
///
/// Carries the per-record accessors the screens need plus the static
/// metadata used to build URLs and labels.
pub trait AggregateRoot {
    /// Aggregate id type
    type Id: AggregateId;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Human-readable name of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection segment (e.g. "servicios" → `/api/servicios/`)
    fn collection_name() -> &'static str;

    /// UI name of a single element (e.g. "Servicio")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Servicios")
    fn list_name() -> &'static str;

    /// Full aggregate name (e.g. "a001_servicios")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
