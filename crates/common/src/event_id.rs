use uuid::Uuid;

use crate::model::RuleSource;

/// `s_<strategy id>_<nonce>` or `e_<expression id>_<nonce>`, so an id alone
/// tells which rule fired.
pub fn generate(source: &RuleSource) -> String {
    let prefix = match source {
        RuleSource::Strategy(_) => 's',
        RuleSource::Expression(_) => 'e',
    };
    format!("{prefix}_{}_{}", source.rule_id(), Uuid::new_v4().simple())
}
