use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::committee_member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CommitteeMember {
    id: i32,
    name: String,
    role: String,
    bio: Option<String>,
    image_url: Option<String>,
    email: Option<String>,
    display_order: i32,
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::database::schema::committee_member)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CommitteeMemberChanges<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub bio: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub email: Option<&'a str>,
    pub display_order: i32,
}

impl<'a> From<&'a dto::committee_member::CommitteeMemberInput> for CommitteeMemberChanges<'a> {
    fn from(input: &'a dto::committee_member::CommitteeMemberInput) -> Self {
        Self {
            name: input.name().trim(),
            role: input.role().trim(),
            bio: input.bio().as_deref(),
            image_url: input.image_url().as_deref(),
            email: input.email().as_deref(),
            display_order: *input.display_order(),
        }
    }
}

impl From<CommitteeMember> for dto::committee_member::CommitteeMember {
    fn from(value: CommitteeMember) -> Self {
        dto::committee_member::CommitteeMember::new(
            value.id,
            value.name,
            value.role,
            value.bio,
            value.image_url,
            value.email,
            value.display_order,
        )
    }
}
