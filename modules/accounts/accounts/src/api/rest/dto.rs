use accounts_sdk::{Account, AccountUpdate, Tags};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::fields::AccountFields;

/// REST representation of an account. `tags` travels as its encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: String,
    pub balance: String,
    pub credit: i64,
    pub picture: String,
    pub name_first: String,
    pub name_last: String,
    pub employer: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub comments: String,
    pub created: String,
    pub tags: String,
}

/// `phone` may arrive as text or as a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhoneInput {
    Text(String),
    Number(serde_json::Number),
}

/// `tags` may arrive encoded (`"[\"a\"]"`) or as a JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    Encoded(String),
    List(Vec<String>),
}

/// REST DTO for creating an account; every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountReq {
    pub id: String,
    pub balance: String,
    pub credit: i64,
    pub picture: String,
    pub name_first: String,
    pub name_last: String,
    pub employer: String,
    pub email: String,
    pub phone: PhoneInput,
    pub address: String,
    pub comments: String,
    pub created: String,
    pub tags: TagsInput,
}

/// REST DTO for replacing an account. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccountReq {
    pub balance: String,
    pub credit: i64,
    pub picture: String,
    pub name_first: String,
    pub name_last: String,
    pub employer: String,
    pub email: String,
    pub phone: PhoneInput,
    pub address: String,
    pub comments: String,
    pub created: String,
    pub tags: TagsInput,
}

impl From<PhoneInput> for String {
    fn from(phone: PhoneInput) -> Self {
        match phone {
            PhoneInput::Text(s) => s,
            PhoneInput::Number(n) => n.to_string(),
        }
    }
}

impl TryFrom<TagsInput> for Tags {
    type Error = DomainError;

    fn try_from(input: TagsInput) -> Result<Self, Self::Error> {
        match input {
            TagsInput::List(items) => Ok(Tags::new(items)),
            TagsInput::Encoded(text) => Tags::decode(&text).map_err(|e| {
                DomainError::validation(
                    AccountFields::TAGS,
                    format!("expected a JSON array of strings: {e}"),
                )
            }),
        }
    }
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            balance: account.balance,
            credit: account.credit,
            picture: account.picture,
            name_first: account.name_first,
            name_last: account.name_last,
            employer: account.employer,
            email: account.email,
            phone: account.phone,
            address: account.address,
            comments: account.comments,
            created: account.created,
            tags: account.tags.encode(),
        }
    }
}

impl TryFrom<UpdateAccountReq> for AccountUpdate {
    type Error = DomainError;

    fn try_from(req: UpdateAccountReq) -> Result<Self, Self::Error> {
        Ok(Self {
            balance: req.balance,
            credit: req.credit,
            picture: req.picture,
            name_first: req.name_first,
            name_last: req.name_last,
            employer: req.employer,
            email: req.email,
            phone: req.phone.into(),
            address: req.address,
            comments: req.comments,
            created: req.created,
            tags: req.tags.try_into()?,
        })
    }
}

impl TryFrom<CreateAccountReq> for Account {
    type Error = DomainError;

    fn try_from(req: CreateAccountReq) -> Result<Self, Self::Error> {
        let CreateAccountReq {
            id,
            balance,
            credit,
            picture,
            name_first,
            name_last,
            employer,
            email,
            phone,
            address,
            comments,
            created,
            tags,
        } = req;
        let update = UpdateAccountReq {
            balance,
            credit,
            picture,
            name_first,
            name_last,
            employer,
            email,
            phone,
            address,
            comments,
            created,
            tags,
        };
        Ok(Account::from_update(id, update.try_into()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_body(tags: serde_json::Value, phone: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "a1", "balance": "$100", "credit": 700, "picture": "u",
            "name_first": "A", "name_last": "B", "employer": "E",
            "email": "e@x.com", "phone": phone, "address": "addr",
            "comments": "c", "created": "2020-01-01", "tags": tags
        })
    }

    #[test]
    fn encoded_tags_round_trip_through_dto() {
        let req: CreateAccountReq =
            serde_json::from_value(create_body(json!(r#"["x","y"]"#), json!("555"))).unwrap();
        let account = Account::try_from(req).unwrap();
        assert_eq!(account.tags, Tags::from_iter(["x", "y"]));

        let dto = AccountDto::from(account);
        assert_eq!(dto.tags, r#"["x","y"]"#);
    }

    #[test]
    fn native_tag_list_is_accepted() {
        let req: CreateAccountReq =
            serde_json::from_value(create_body(json!(["x"]), json!("555"))).unwrap();
        let account = Account::try_from(req).unwrap();
        assert_eq!(account.tags, Tags::from_iter(["x"]));
    }

    #[test]
    fn undecodable_tags_are_a_validation_error() {
        let req: CreateAccountReq =
            serde_json::from_value(create_body(json!("a, b"), json!("555"))).unwrap();
        let err = Account::try_from(req).unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "tags"));
    }

    #[test]
    fn numeric_phone_becomes_text() {
        let req: CreateAccountReq =
            serde_json::from_value(create_body(json!("[]"), json!(5_551_234))).unwrap();
        assert_eq!(Account::try_from(req).unwrap().phone, "5551234");
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let mut body = create_body(json!("[]"), json!("555"));
        body.as_object_mut().unwrap().remove("email");
        assert!(serde_json::from_value::<CreateAccountReq>(body).is_err());
    }

    #[test]
    fn update_ignores_body_id() {
        let mut body = create_body(json!("[]"), json!("555"));
        body["id"] = json!("ignored");
        let req: UpdateAccountReq = serde_json::from_value(body).unwrap();
        let update = AccountUpdate::try_from(req).unwrap();
        assert_eq!(update.email, "e@x.com");
    }
}
