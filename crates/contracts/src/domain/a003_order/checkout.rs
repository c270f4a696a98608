//! Форма оформления заказа и её валидация

use super::aggregate::OrderUser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Способы оплаты, которые принимает API
pub const PAYMENT_METHODS: [&str; 3] = ["ATM", "信用卡", "超商付款"];

pub const REQUIRED_MESSAGE: &str = "必填";

/// Field name -> first error message
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_tel"))]
    pub tel: String,

    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[validate(custom(function = "validate_payment"))]
    pub payment: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            tel: String::new(),
            email: String::new(),
            address: String::new(),
            payment: PAYMENT_METHODS[0].to_string(),
        }
    }
}

impl CheckoutForm {
    /// Trimmed copy that goes over the wire
    pub fn to_user(&self) -> OrderUser {
        OrderUser {
            name: self.name.trim().to_string(),
            tel: self.tel.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            payment: self.payment.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderData {
    pub user: OrderUser,
}

/// POST customer/{path}/orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub data: CreateOrderData,
}

impl CreateOrderRequest {
    /// Validates the form first; the request is only built from a valid form
    pub fn from_form(form: &CheckoutForm) -> Result<Self, FieldErrors> {
        validate_checkout(form)?;
        Ok(Self {
            data: CreateOrderData {
                user: form.to_user(),
            },
        })
    }
}

pub fn validate_checkout(form: &CheckoutForm) -> Result<(), FieldErrors> {
    form.validate().map_err(|errors| field_messages(&errors))
}

pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| REQUIRED_MESSAGE.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

fn error_with(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with("required", REQUIRED_MESSAGE));
    }
    Ok(())
}

fn validate_tel(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');
    let digits = body.chars().filter(|c| c.is_ascii_digit()).count();
    if !allowed || !(8..=10).contains(&digits) {
        return Err(error_with("tel", "電話格式錯誤"));
    }
    Ok(())
}

fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if !value.trim().validate_email() {
        return Err(error_with("email", "Email 格式錯誤"));
    }
    Ok(())
}

fn validate_payment(value: &str) -> Result<(), ValidationError> {
    if !PAYMENT_METHODS.iter().any(|m| *m == value) {
        return Err(error_with("payment", "請選擇付款方式"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "王小明".into(),
            tel: "0912-345-678".into(),
            email: "ming@example.com".into(),
            address: "台北市信義區".into(),
            payment: "信用卡".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_checkout(&valid_form()).is_ok());
    }

    #[test]
    fn test_default_form_reports_required_fields() {
        let errors = validate_checkout(&CheckoutForm::default()).unwrap_err();
        for field in ["name", "tel", "email", "address"] {
            assert_eq!(errors.get(field).map(String::as_str), Some(REQUIRED_MESSAGE));
        }
        assert!(!errors.contains_key("payment"));
    }

    #[test]
    fn test_blank_is_required_not_format_error() {
        let mut form = valid_form();
        form.tel = "   ".into();
        let errors = validate_checkout(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["tel"], REQUIRED_MESSAGE);
    }

    #[test]
    fn test_bad_tel() {
        for tel in ["123", "09x2345678", "09123456789012"] {
            let mut form = valid_form();
            form.tel = tel.into();
            let errors = validate_checkout(&form).unwrap_err();
            assert_eq!(errors["tel"], "電話格式錯誤", "tel {}", tel);
        }
        let mut form = valid_form();
        form.tel = "+886 912345678".into();
        assert!(validate_checkout(&form).is_err());
        form.tel = "+886912345".into();
        assert!(validate_checkout(&form).is_ok());
    }

    #[test]
    fn test_bad_email() {
        let mut form = valid_form();
        form.email = "not-an-email".into();
        let errors = validate_checkout(&form).unwrap_err();
        assert_eq!(errors["email"], "Email 格式錯誤");
    }

    #[test]
    fn test_unknown_payment() {
        let mut form = valid_form();
        form.payment = "比特幣".into();
        let errors = validate_checkout(&form).unwrap_err();
        assert_eq!(errors["payment"], "請選擇付款方式");
    }

    #[test]
    fn test_request_is_trimmed() {
        let mut form = valid_form();
        form.name = "  王小明 ".into();
        let req = CreateOrderRequest::from_form(&form).unwrap();
        assert_eq!(req.data.user.name, "王小明");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["data"]["user"]["payment"], "信用卡");
    }
}
