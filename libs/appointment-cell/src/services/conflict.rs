use tracing::{debug, warn};

use crate::models::{Appointment, AppointmentError};
use crate::services::AppointmentRepository;

/// Checks a candidate appointment against everything already booked in its
/// room. The overlap rule itself lives on `Appointment::overlaps`; this
/// service only supplies the candidate set.
pub struct ConflictDetectionService<'a> {
    repository: &'a AppointmentRepository,
}

impl<'a> ConflictDetectionService<'a> {
    pub fn new(repository: &'a AppointmentRepository) -> Self {
        Self { repository }
    }

    /// Returns the first booked appointment the candidate overlaps with, or
    /// `None` when the slot is free. `exclude_appointment_id` keeps a
    /// reschedule from conflicting with itself.
    pub async fn find_conflict(
        &self,
        candidate: &Appointment,
        exclude_appointment_id: Option<i64>,
    ) -> Result<Option<Appointment>, AppointmentError> {
        debug!(
            "Checking conflicts in room {} from {} to {}",
            candidate.room.room_name, candidate.starts_at, candidate.finishes_at
        );

        let booked = self
            .repository
            .find_by_room(&candidate.room.room_name)
            .await?;

        for appointment in booked {
            if exclude_appointment_id == Some(appointment.id) {
                continue;
            }

            if candidate.overlaps(&appointment) {
                warn!(
                    "Conflict detected in room {} with appointment {}",
                    candidate.room.room_name, appointment.id
                );
                return Ok(Some(appointment));
            }
        }

        Ok(None)
    }
}
