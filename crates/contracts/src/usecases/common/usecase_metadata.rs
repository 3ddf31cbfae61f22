/// Identification of a use case (index, technical name, UI title)
pub trait UseCaseMetadata {
    /// Use case index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "realizar_pedido"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_realizar_pedido"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
