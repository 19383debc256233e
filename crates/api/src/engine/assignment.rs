//! The slot assignment engine: one entry point for creating or updating a
//! slot, and one for removing it.
//!
//! The validation sequence is fail-fast and ordered so every rejection maps
//! to a single taxonomy value: validation (numeric bounds, unknown day),
//! not-found (cohort/week/subject/instructor/slot), forbidden (role or
//! relationship), conflict (occupied cell), disabled-slot (week
//! configuration). The authorize/conflict/write phase runs inside one
//! transaction committed only after every check passes; an early `?` return
//! drops the transaction, which rolls it back.

use quadro_core::error::CoreError;
use quadro_core::grid::Weekday;
use quadro_core::roles::Role;
use quadro_core::slots::{self, SlotStatus};
use quadro_core::types::DbId;
use quadro_db::models::slot::{AssignSlotRequest, Slot, SlotWrite};
use quadro_db::repositories::{
    AssignmentRepo, CohortRepo, InstructorRepo, SlotRepo, SubjectRepo, WeekRepo,
};
use quadro_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Validate and persist a create-or-update of exactly one slot.
///
/// Returns the persisted slot. Instructor-created (or rewritten) slots come
/// back `pending`; administrator ones `confirmed`.
pub async fn assign_slot(
    pool: &DbPool,
    caller: &AuthUser,
    input: &AssignSlotRequest,
) -> AppResult<Slot> {
    if !caller.role.can_schedule() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only instructors and administrators may schedule slots".into(),
        )));
    }

    // 1. Numeric bounds and day name.
    slots::validate_span(input.period, input.duration).map_err(AppError::Core)?;
    let day: Weekday = input
        .day
        .parse()
        .map_err(|e: String| AppError::Core(CoreError::Validation(e)))?;

    // 2. Referenced registry rows must exist.
    let cohort = CohortRepo::find_by_id(pool, input.cohort_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cohort",
            id: input.cohort_id,
        }))?;
    let week = WeekRepo::find_by_id(pool, input.week_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Week",
            id: input.week_id,
        }))?;
    let subject = SubjectRepo::find_by_id(pool, input.subject_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }))?;

    // 3. Resolve the effective instructor. Administrators schedule on
    //    behalf of any instructor; instructors always schedule themselves.
    let instructor_id = resolve_instructor(pool, caller, input.instructor_id).await?;

    // 4. Instructors must hold a subject-cohort assignment for this subject
    //    in this cohort; administrators bypass this.
    if !caller.role.is_administrator() {
        let assignment =
            AssignmentRepo::find_for_subject_cohort(pool, input.subject_id, input.cohort_id)
                .await?;
        if !assignment.is_some_and(|a| a.authorizes(instructor_id)) {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "You are not authorized to teach '{}' in cohort '{}'",
                subject.name, cohort.name
            ))));
        }
    }

    let status = SlotStatus::for_creator(caller.role);
    let write = SlotWrite {
        cohort_id: input.cohort_id,
        week_id: input.week_id,
        day_of_week: day.as_str().to_string(),
        period: input.period,
        duration: input.duration,
        subject_id: input.subject_id,
        instructor_id,
        status: status.as_str().to_string(),
    };

    // 5-7. Authorize, check the cell, and write, atomically. The
    //    in-transaction overlap check produces the friendly conflict
    //    message; the uq_slots_cell unique constraint is the hard guarantee
    //    under concurrent requests.
    let mut tx = pool.begin().await.map_err(AppError::Database)?;

    // 5. On update: the target slot must exist and belong to the caller
    //    (administrators edit anything).
    let existing = match input.slot_id {
        Some(slot_id) => {
            let existing = SlotRepo::find_by_id_for_update(&mut tx, slot_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Slot",
                    id: slot_id,
                }))?;
            let caller_instructor = caller_instructor_id(pool, caller).await?;
            if !slots::can_edit_slot(caller.role, caller_instructor, existing.instructor_id) {
                return Err(AppError::Core(CoreError::Forbidden(
                    "You may not edit this slot".into(),
                )));
            }
            Some(existing)
        }
        None => None,
    };

    // 6. The target span must be free. A moved slot never collides with
    //    itself: its own row is excluded from the overlap scan.
    if let Some(occupant) = SlotRepo::find_overlapping(
        &mut tx,
        input.cohort_id,
        input.week_id,
        day.as_str(),
        input.period,
        input.duration,
        existing.as_ref().map(|e| e.id),
    )
    .await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Period {} on {} is already occupied in this week's timetable",
            occupant.period, day
        ))));
    }

    // 7. Week visibility: disabled weekend days, hidden late periods, and
    //    per-day period caps bind everyone except administrators.
    week.policy()
        .check(caller.role, day, input.period, input.duration)
        .map_err(AppError::Core)?;

    let slot = match existing {
        Some(existing) => SlotRepo::rewrite(&mut tx, existing.id, &write).await?,
        None => SlotRepo::insert(&mut tx, &write).await?,
    };

    tx.commit().await.map_err(AppError::Database)?;

    tracing::info!(
        slot_id = slot.id,
        cohort_id = slot.cohort_id,
        week_id = slot.week_id,
        day = %slot.day_of_week,
        period = slot.period,
        duration = slot.duration,
        status = %slot.status,
        user_id = caller.user_id,
        "Slot saved"
    );

    Ok(slot)
}

/// Remove a slot. Administrators may remove any slot; instructors only
/// slots assigned to themselves.
pub async fn remove_slot(pool: &DbPool, caller: &AuthUser, slot_id: DbId) -> AppResult<()> {
    let slot = SlotRepo::find_by_id(pool, slot_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slot",
            id: slot_id,
        }))?;

    let caller_instructor = caller_instructor_id(pool, caller).await?;
    if !slots::can_edit_slot(caller.role, caller_instructor, slot.instructor_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may not remove this slot".into(),
        )));
    }

    SlotRepo::delete(pool, slot_id).await?;

    tracing::info!(slot_id, user_id = caller.user_id, "Slot removed");
    Ok(())
}

/// The caller's own instructor-profile id, if their role has one.
pub async fn caller_instructor_id(
    pool: &DbPool,
    caller: &AuthUser,
) -> AppResult<Option<DbId>> {
    if caller.role != Role::Instructor {
        return Ok(None);
    }
    let profile = InstructorRepo::find_by_user_id(pool, caller.user_id).await?;
    Ok(profile.map(|p| p.id))
}

/// Resolve the instructor a slot will be assigned to.
async fn resolve_instructor(
    pool: &DbPool,
    caller: &AuthUser,
    requested: Option<DbId>,
) -> AppResult<DbId> {
    if caller.role.is_administrator() {
        let id = requested.ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "An instructor is required when scheduling as administrator".into(),
            ))
        })?;
        InstructorRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Instructor",
                id,
            }))?;
        Ok(id)
    } else {
        let profile = InstructorRepo::find_by_user_id(pool, caller.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden(
                    "Caller has no instructor profile".into(),
                ))
            })?;
        Ok(profile.id)
    }
}
