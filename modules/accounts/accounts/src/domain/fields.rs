/// Field names of an account record, as they appear in JSONL input,
/// REST payloads and table columns.
pub struct AccountFields;

impl AccountFields {
    pub const ID: &'static str = "id";
    pub const BALANCE: &'static str = "balance";
    pub const CREDIT: &'static str = "credit";
    pub const PICTURE: &'static str = "picture";
    pub const NAME_FIRST: &'static str = "name_first";
    pub const NAME_LAST: &'static str = "name_last";
    pub const EMPLOYER: &'static str = "employer";
    pub const EMAIL: &'static str = "email";
    pub const PHONE: &'static str = "phone";
    pub const ADDRESS: &'static str = "address";
    pub const COMMENTS: &'static str = "comments";
    pub const CREATED: &'static str = "created";
    pub const TAGS: &'static str = "tags";

    /// All fields in column order.
    pub const ALL: [&'static str; 13] = [
        Self::ID,
        Self::BALANCE,
        Self::CREDIT,
        Self::PICTURE,
        Self::NAME_FIRST,
        Self::NAME_LAST,
        Self::EMPLOYER,
        Self::EMAIL,
        Self::PHONE,
        Self::ADDRESS,
        Self::COMMENTS,
        Self::CREATED,
        Self::TAGS,
    ];
}
