use chrono::{DateTime, TimeZone, Utc};

use appointment_cell::models::Appointment;
use doctor_cell::models::Doctor;
use patient_cell::models::Patient;
use room_cell::models::Room;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 24, hour, min, 0).unwrap()
}

fn appointment(room: &str, starts_at: DateTime<Utc>, finishes_at: DateTime<Utc>) -> Appointment {
    Appointment {
        id: 0,
        patient: Patient {
            id: 0,
            first_name: "Jose Luis".to_string(),
            last_name: "Olaya".to_string(),
            age: 37,
            email: "j.olaya@email.com".to_string(),
        },
        doctor: Doctor {
            id: 0,
            first_name: "Perla".to_string(),
            last_name: "Amalia".to_string(),
            age: 24,
            email: "p.amalia@hospital.accwe".to_string(),
        },
        room: Room::new(room),
        starts_at,
        finishes_at,
    }
}

#[test]
fn appointments_overlap_when_starting_at_the_same_time() {
    let a1 = appointment("Dermatology", at(19, 30), at(20, 30));
    let a2 = appointment("Dermatology", at(19, 30), at(20, 30));

    assert!(a1.overlaps(&a2));
}

#[test]
fn appointments_overlap_when_finishing_at_the_same_time() {
    let a1 = appointment("Dermatology", at(20, 0), at(20, 30));
    let a2 = appointment("Dermatology", at(19, 30), at(20, 30));

    assert!(a1.overlaps(&a2));
}

#[test]
fn appointments_overlap_when_one_begins_before_the_other_ends() {
    let a1 = appointment("Dermatology", at(19, 0), at(20, 0));
    let a2 = appointment("Dermatology", at(19, 30), at(20, 30));

    assert!(a1.overlaps(&a2));
    assert!(a2.overlaps(&a1));
}

#[test]
fn appointments_overlap_when_one_contains_the_other() {
    let a1 = appointment("Dermatology", at(18, 0), at(21, 0));
    let a2 = appointment("Dermatology", at(19, 0), at(20, 0));

    assert!(a1.overlaps(&a2));
    assert!(a2.overlaps(&a1));
}

#[test]
fn touching_boundaries_count_as_overlap() {
    // Closed intervals: a start equal to the other's finish is a conflict.
    let a1 = appointment("Dermatology", at(19, 0), at(20, 0));
    let a2 = appointment("Dermatology", at(20, 0), at(21, 0));

    assert!(a1.overlaps(&a2));
    assert!(a2.overlaps(&a1));
}

#[test]
fn disjoint_appointments_do_not_overlap() {
    let a1 = appointment("Dermatology", at(19, 0), at(20, 0));
    let a2 = appointment("Dermatology", at(20, 30), at(21, 30));

    assert!(!a1.overlaps(&a2));
    assert!(!a2.overlaps(&a1));
}

#[test]
fn appointments_in_different_rooms_never_overlap() {
    let a1 = appointment("Dermatology", at(19, 0), at(20, 0));
    let a2 = appointment("Cardiology", at(19, 30), at(20, 30));

    assert!(!a1.overlaps(&a2));
    assert!(!a2.overlaps(&a1));
}

#[test]
fn interval_must_start_before_it_finishes() {
    let valid = appointment("Dermatology", at(19, 0), at(20, 0));
    let zero_length = appointment("Dermatology", at(19, 0), at(19, 0));
    let reversed = appointment("Dermatology", at(20, 0), at(19, 0));

    assert!(valid.has_valid_interval());
    assert!(!zero_length.has_valid_interval());
    assert!(!reversed.has_valid_interval());
}

#[test]
fn appointment_id_can_be_set() {
    let mut a = appointment("Dermatology", at(19, 0), at(20, 0));

    a.id = 1;

    assert_eq!(a.id, 1);
}
