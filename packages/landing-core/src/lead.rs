//! Lead form validation.
//!
//! The form never leaves the browser. Submitting validates the fields in a
//! fixed order and answers with a [`Toast`]: the first failure, or the
//! confirmation (after which the form is cleared).

use thiserror::Error;

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;
const MIN_MUST_HAVE_CHARS: usize = 6;

pub const SUCCESS_MESSAGE: &str =
    "Perfeito! Curadoria recebida. Em breve um especialista te chama. ✅";

/// First failed check of a lead submission. `Display` is the message shown to
/// the visitor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LeadError {
    #[error("Preencha seu nome direitinho 🙂")]
    NameTooShort,

    #[error("WhatsApp incompleto. Coloque DDD + número.")]
    PhoneIncomplete,

    #[error("Escolha o tipo desejado.")]
    MissingType,

    #[error("Selecione sua prioridade.")]
    MissingPriority,

    #[error("Escreva pelo menos 1 requisito importante (ex.: baixo condomínio).")]
    MustHaveTooShort,
}

/// Strip everything that is not an ASCII digit.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Field values of the lead form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    /// Property type (`type` field)
    pub kind: String,
    pub priority: String,
    /// Free-text "must have" requirement
    pub must: String,
}

impl LeadForm {
    /// Check the fields in order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(LeadError::NameTooShort);
        }
        if normalize_phone(self.phone.trim()).len() < MIN_PHONE_DIGITS {
            return Err(LeadError::PhoneIncomplete);
        }
        if self.kind.trim().is_empty() {
            return Err(LeadError::MissingType);
        }
        if self.priority.trim().is_empty() {
            return Err(LeadError::MissingPriority);
        }
        if self.must.trim().chars().count() < MIN_MUST_HAVE_CHARS {
            return Err(LeadError::MustHaveTooShort);
        }
        Ok(())
    }

    /// Validate and answer with a toast. A valid form is cleared; an invalid
    /// one is left as typed.
    pub fn submit(&mut self) -> Toast {
        match self.validate() {
            Ok(()) => {
                tracing::info!(kind = %self.kind.trim(), priority = %self.priority.trim(), "Lead accepted");
                self.reset();
                Toast::success(SUCCESS_MESSAGE)
            }
            Err(err) => {
                tracing::debug!(?err, "Lead rejected");
                Toast::error(err.to_string())
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

impl ToastTone {
    pub fn border_color(&self) -> &'static str {
        match self {
            ToastTone::Success => "rgba(3,152,208,.35)",
            ToastTone::Error => "rgba(220,53,69,.35)",
        }
    }
}

/// Inline message under the lead form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub tone: ToastTone,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: ToastTone::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: ToastTone::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == ToastTone::Error
    }

    /// Inline style of the toast element
    pub fn style(&self) -> String {
        format!(
            "display: block; border-style: solid; border-color: {};",
            self.tone.border_color()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeadForm {
        LeadForm {
            name: "Ana".into(),
            phone: "19 98161-1842".into(),
            kind: "apartamento".into(),
            priority: "preco".into(),
            must: "baixo condomínio".into(),
        }
    }

    #[test]
    fn phone_keeps_only_digits() {
        assert_eq!(normalize_phone("(19) 98161-1842"), "19981611842");
        assert_eq!(normalize_phone("+55 ١٩"), "55");
    }

    #[test]
    fn checks_run_in_order() {
        let mut form = LeadForm::default();
        assert_eq!(form.validate(), Err(LeadError::NameTooShort));

        form.name = "Ana".into();
        form.phone = "1998161".into();
        assert_eq!(form.validate(), Err(LeadError::PhoneIncomplete));

        form.phone = "19 98161-1842".into();
        assert_eq!(form.validate(), Err(LeadError::MissingType));

        form.kind = "studio".into();
        assert_eq!(form.validate(), Err(LeadError::MissingPriority));

        form.priority = "localizacao".into();
        form.must = "vaga ".into();
        assert_eq!(form.validate(), Err(LeadError::MustHaveTooShort));

        form.must = "vaga coberta".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn whitespace_does_not_count() {
        let mut form = valid();
        form.name = "  A  ".into();
        assert_eq!(form.validate(), Err(LeadError::NameTooShort));

        let mut form = valid();
        form.kind = "   ".into();
        assert_eq!(form.validate(), Err(LeadError::MissingType));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut form = valid();
        form.name = "Jó".into();
        form.must = "açaí!".into();
        assert_eq!(form.validate(), Err(LeadError::MustHaveTooShort));
        form.must = "suítes".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let mut form = valid();
        form.name = "A".into();

        let toast = form.submit();
        assert!(toast.is_error());
        assert_eq!(toast.message, "Preencha seu nome direitinho 🙂");
        assert_eq!(form.name, "A");
        assert_eq!(form.phone, "19 98161-1842");
    }

    #[test]
    fn accepted_submit_clears_fields() {
        let mut form = valid();
        let toast = form.submit();

        assert_eq!(toast, Toast::success(SUCCESS_MESSAGE));
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn toast_style_reflects_tone() {
        assert!(Toast::error("x").style().contains("rgba(220,53,69,.35)"));
        assert!(Toast::success("x").style().contains("rgba(3,152,208,.35)"));
    }
}
