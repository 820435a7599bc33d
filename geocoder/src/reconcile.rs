//! Compatibilité entre la sortie d'un dumper et le stockage du champ cible
//!
//! Deux corrections, dans cet ordre :
//! 1. réencodage en UTF-8 d'une sortie qui ne l'est pas (lecture Latin-1, sans échec possible) ;
//! 2. troncature à `max_length` caractères pour les types de champ à longueur bornée.
//!
//! La décision d'avertir est prise ici, l'émission est déléguée à un [`Notifier`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Mutex;

use crate::types::FieldDescriptor;

/// Troncature appliquée à une sortie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Longueur en caractères avant troncature
    pub original_length: usize,
    /// Limite appliquée
    pub max_length: usize,
}

/// Résultat d'une réconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Valeur UTF-8, bornée si le champ l'exige
    pub value: String,
    /// Présent si et seulement si la valeur a été tronquée
    pub truncation: Option<Truncation>,
}

impl Reconciled {
    pub fn truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Avertissement émis quand une sortie de dumper a été tronquée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationWarning {
    /// Libellé du champ
    pub field: String,
    /// Identifiant du dumper
    pub dumper: String,
    /// Limite appliquée
    pub max_length: usize,
    /// Longueur de la sortie avant troncature
    pub original_length: usize,
}

impl TruncationWarning {
    pub fn new(field: &FieldDescriptor, dumper: impl Into<String>, truncation: Truncation) -> Self {
        Self {
            field: field.name.clone(),
            dumper: dumper.into(),
            max_length: truncation.max_length,
            original_length: truncation.original_length,
        }
    }
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The '{field}' field 'max length' property is not compatible with the chosen '{dumper}' dumper. \
             The dumper output has been truncated to {max} chars (max length). \
             Change the '{field}' field definition or choose another compatible dumper.",
            field = self.field,
            dumper = self.dumper,
            max = self.max_length,
        )
    }
}

/// Destinataire des avertissements de troncature (messages, logs)
pub trait Notifier: Send + Sync {
    fn warn(&self, warning: &TruncationWarning);
}

/// Ignore les avertissements
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn warn(&self, _warning: &TruncationWarning) {}
}

/// Conserve les avertissements en mémoire
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    warnings: Mutex<Vec<TruncationWarning>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copie des avertissements reçus, dans l'ordre
    pub fn warnings(&self) -> Vec<TruncationWarning> {
        self.warnings
            .lock()
            .map(|w| w.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Notifier for CollectingNotifier {
    fn warn(&self, warning: &TruncationWarning) {
        match self.warnings.lock() {
            Ok(mut w) => w.push(warning.clone()),
            Err(poisoned) => poisoned.into_inner().push(warning.clone()),
        }
    }
}

/// Garantit une chaîne UTF-8.
///
/// Une entrée UTF-8 valide est rendue telle quelle (emprunt). Sinon chaque octet
/// est lu comme un caractère ISO-8859-1 : la conversion ne peut pas échouer mais
/// les séquences multi-octets d'autres encodages sont altérées.
pub fn repair_encoding(output: &[u8]) -> Cow<'_, str> {
    match simdutf8::basic::from_utf8(output) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => encoding_rs::mem::decode_latin1(output),
    }
}

/// Adapte une sortie de dumper aux contraintes du champ cible.
pub fn reconcile(output: &[u8], field: &FieldDescriptor) -> Reconciled {
    let mut value = repair_encoding(output).into_owned();

    let truncation = field
        .effective_max_length()
        .and_then(|max_length| truncate_chars(&mut value, max_length));

    Reconciled { value, truncation }
}

/// Tronque à `max_length` caractères, sans couper un caractère
fn truncate_chars(value: &mut String, max_length: usize) -> Option<Truncation> {
    let (cut, _) = value.char_indices().nth(max_length)?;
    let original_length = max_length + value[cut..].chars().count();
    value.truncate(cut);
    Some(Truncation {
        original_length,
        max_length,
    })
}
