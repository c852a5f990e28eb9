use super::Result;
use crate::database::model::committee_member::{CommitteeMember, CommitteeMemberChanges};
use crate::database::schema::committee_member::dsl;
use diesel::prelude::*;
use dto::committee_member::CommitteeMemberInput;

pub fn insert(
    connection: &mut SqliteConnection,
    input: &CommitteeMemberInput,
) -> Result<dto::committee_member::CommitteeMember> {
    let member = diesel::insert_into(dsl::committee_member)
        .values(CommitteeMemberChanges::from(input))
        .returning(CommitteeMember::as_returning())
        .get_result(connection)?;
    debug!("Inserted committee member [name: {}]", input.name());

    Ok(member.into())
}

/// Return the updated member, or `None` if there is no member with this id.
pub fn update(
    connection: &mut SqliteConnection,
    id: i32,
    input: &CommitteeMemberInput,
) -> Result<Option<dto::committee_member::CommitteeMember>> {
    let member = diesel::update(dsl::committee_member.find(id))
        .set(CommitteeMemberChanges::from(input))
        .returning(CommitteeMember::as_returning())
        .get_result(connection)
        .optional()?;

    Ok(member.map(Into::into))
}

pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(dsl::committee_member.find(id)).execute(connection)?;

    Ok(count)
}

/// Members sorted the way they are shown: display order, then name.
pub fn retrieve_all(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::committee_member::CommitteeMember>> {
    let members = dsl::committee_member
        .select(CommitteeMember::as_select())
        .order((dsl::display_order.asc(), dsl::name.asc(), dsl::id.asc()))
        .load(connection)?;

    Ok(members.into_iter().map(Into::into).collect())
}
