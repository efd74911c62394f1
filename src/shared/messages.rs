//! Response Message Catalog
//!
//! Every human-readable string the API returns, in each supported locale.

use serde::Deserialize;

/// Language used for response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

/// Top-level response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    InvitesListed,
    InviteCreated,
    InviteFound,
    InviteUpdated,
    PresenceUpdated,
    InviteDeleted,
    InviteNotFound,
    ValidationFailed,
    NothingToUpdate,
    UnsupportedOperation,
    MalformedBody,
    Unauthenticated,
}

impl Message {
    /// Render the message in the given locale.
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => self.arabic(),
            Locale::En => self.english(),
        }
    }

    fn arabic(self) -> &'static str {
        match self {
            Self::InvitesListed => "تم جلب قائمة المدعوين بنجاح",
            Self::InviteCreated => "تم إضافة المدعو بنجاح",
            Self::InviteFound => "تم العثور على بيانات المدعو بنجاح",
            Self::InviteUpdated => "تم تحديث بيانات المدعو بنجاح",
            Self::PresenceUpdated => "تم تحديث حالة حضور المدعو بنجاح",
            Self::InviteDeleted => "تم حذف المدعو بنجاح",
            Self::InviteNotFound => "المدعو غير موجود",
            Self::ValidationFailed => "فشل في التحقق من صحة البيانات",
            Self::NothingToUpdate => "لم يتم تقديم أي بيانات للتحديث",
            Self::UnsupportedOperation => "لا يدعم هذا المنصة",
            Self::MalformedBody => "صيغة الطلب غير صالحة",
            Self::Unauthenticated => "غير مصرح بالدخول",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::InvitesListed => "Invites retrieved successfully",
            Self::InviteCreated => "Invite created successfully",
            Self::InviteFound => "Invite retrieved successfully",
            Self::InviteUpdated => "Invite updated successfully",
            Self::PresenceUpdated => "Invite presence updated successfully",
            Self::InviteDeleted => "Invite deleted successfully",
            Self::InviteNotFound => "Invite not found",
            Self::ValidationFailed => "The given data was invalid",
            Self::NothingToUpdate => "No data was submitted for update",
            Self::UnsupportedOperation => "This operation is not supported on this platform",
            Self::MalformedBody => "The request body is not valid JSON",
            Self::Unauthenticated => "Unauthenticated",
        }
    }
}

/// Human-readable label for an invite field.
pub fn field_label(field: &str, locale: Locale) -> String {
    let label = match (locale, field) {
        (Locale::Ar, "first_name") => "الاسم الأول",
        (Locale::Ar, "last_name") => "اسم العائلة",
        (Locale::Ar, "description") => "الوصف",
        (Locale::Ar, "phone") => "رقم الهاتف",
        (Locale::Ar, "presence") => "حالة الحضور",
        (Locale::En, "first_name") => "first name",
        (Locale::En, "last_name") => "last name",
        (Locale::En, "description") => "description",
        (Locale::En, "phone") => "phone",
        (Locale::En, "presence") => "presence",
        (_, other) => other,
    };
    label.to_string()
}

/// Render one field-level validation reason from its code.
///
/// `max` carries the length limit for `max` failures, `allowed` the accepted
/// values for `in` failures.
pub fn field_reason(
    locale: Locale,
    field: &str,
    code: &str,
    max: Option<u64>,
    allowed: Option<&str>,
) -> String {
    let label = field_label(field, locale);
    match (locale, code) {
        (Locale::Ar, "required") => format!("حقل {} مطلوب", label),
        (Locale::Ar, "string") => format!("يجب أن يكون حقل {} نصاً", label),
        (Locale::Ar, "max") => format!(
            "يجب ألا يتجاوز حقل {} {} حرفاً",
            label,
            max.unwrap_or_default()
        ),
        (Locale::Ar, "in") => format!(
            "القيمة المحددة في حقل {} غير صالحة ({})",
            label,
            allowed.unwrap_or_default()
        ),
        (Locale::Ar, _) => format!("حقل {} غير صالح", label),
        (Locale::En, "required") => format!("The {} field is required.", label),
        (Locale::En, "string") => format!("The {} field must be a string.", label),
        (Locale::En, "max") => format!(
            "The {} field must not be greater than {} characters.",
            label,
            max.unwrap_or_default()
        ),
        (Locale::En, "in") => format!(
            "The selected {} is invalid. Allowed values: {}.",
            label,
            allowed.unwrap_or_default()
        ),
        (Locale::En, _) => format!("The {} field is invalid.", label),
    }
}
