/// Why an evaluation produced an error value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined function: {0}")]
    UndefinedFunction(String),
    #[error("not a function: {0}")]
    NotAFunction(String),
    #[error("malformed {form}: {reason}")]
    MalformedForm {
        form: &'static str,
        reason: &'static str,
    },
}

impl EvalError {
    pub(crate) fn malformed(form: &'static str, reason: &'static str) -> Self {
        Self::MalformedForm { form, reason }
    }
}
