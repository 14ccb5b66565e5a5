/// Lookup labels resolved for one registry record before serialization.
///
/// Each field already carries its wire value: `Some("-")` when the
/// reference is unset or points at a missing row, `None` when the
/// referenced row exists but has no label, and the label otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtorLabels {
    pub instituicao: Option<String>,
    pub tipo: Option<String>,
    pub modalidade: Option<String>,
}
