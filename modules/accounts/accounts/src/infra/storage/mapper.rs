use accounts_sdk::{Account, AccountUpdate, Tags};
use sea_orm::ActiveValue::Set;

use crate::domain::error::DomainError;
use crate::domain::fields::AccountFields;
use crate::infra::storage::entity::{ActiveModel as AccountAM, Model as AccountEntity};

/// Convert a database row to a contract model.
///
/// Fails only if the stored tag text is not the JSON array encoding.
impl TryFrom<AccountEntity> for Account {
    type Error = DomainError;

    fn try_from(e: AccountEntity) -> Result<Self, Self::Error> {
        let tags = Tags::decode(&e.tags).map_err(|err| {
            DomainError::database(format!(
                "stored {} of account '{}' is not a JSON array: {err}",
                AccountFields::TAGS,
                e.id
            ))
        })?;

        Ok(Self {
            id: e.id,
            balance: e.balance,
            credit: e.credit,
            picture: e.picture,
            name_first: e.name_first,
            name_last: e.name_last,
            employer: e.employer,
            email: e.email,
            phone: e.phone,
            address: e.address,
            comments: e.comments,
            created: e.created,
            tags,
        })
    }
}

/// Active model with every column set, for inserts.
impl From<Account> for AccountAM {
    fn from(a: Account) -> Self {
        Self {
            id: Set(a.id),
            balance: Set(a.balance),
            credit: Set(a.credit),
            picture: Set(a.picture),
            name_first: Set(a.name_first),
            name_last: Set(a.name_last),
            employer: Set(a.employer),
            email: Set(a.email),
            phone: Set(a.phone),
            address: Set(a.address),
            comments: Set(a.comments),
            created: Set(a.created),
            tags: Set(a.tags.encode()),
        }
    }
}

/// Mark every non-key column of `am` as changed.
pub fn apply_update(am: &mut AccountAM, u: AccountUpdate) {
    am.balance = Set(u.balance);
    am.credit = Set(u.credit);
    am.picture = Set(u.picture);
    am.name_first = Set(u.name_first);
    am.name_last = Set(u.name_last);
    am.employer = Set(u.employer);
    am.email = Set(u.email);
    am.phone = Set(u.phone);
    am.address = Set(u.address);
    am.comments = Set(u.comments);
    am.created = Set(u.created);
    am.tags = Set(u.tags.encode());
}
