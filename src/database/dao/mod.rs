use crate::database::error::DatabaseError;

pub(crate) mod committee_member;
pub(crate) mod event;
pub(crate) mod group_link;
pub(crate) mod registration;
pub(crate) mod statistics;
pub(crate) mod student;
pub(crate) mod testimonial;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Convert every loaded row into its DTO, failing on the first malformed one.
fn into_dtos<M, D>(rows: Vec<M>) -> Result<Vec<D>>
where
    D: TryFrom<M, Error = DatabaseError>,
{
    let mut dtos = Vec::with_capacity(rows.len());
    for row in rows {
        dtos.push(D::try_from(row)?);
    }

    Ok(dtos)
}
