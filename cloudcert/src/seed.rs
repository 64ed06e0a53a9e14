//! Fixed mock identities and the seed document collection. State resets to
//! this data on every start; nothing is persisted.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::models::{DocCategory, Document, ReviewState, Role, User};

pub static MOCK_STUDENT: Lazy<User> = Lazy::new(|| User {
    name: "Alex Johnson".to_string(),
    email: "alex.j@college.edu".to_string(),
    role: Role::Student,
    points_earned: 124,
    points_target: 200,
    storage_used_gb: 1.2,
    storage_limit_gb: 5.0,
    avatar: "https://picsum.photos/seed/alex/200/200".to_string(),
});

pub static MOCK_TEACHER: Lazy<User> = Lazy::new(|| User {
    name: "Dr. Sarah Miller".to_string(),
    email: "s.miller@college.edu".to_string(),
    role: Role::Teacher,
    points_earned: 0,
    points_target: 0,
    storage_used_gb: 0.0,
    storage_limit_gb: 0.0,
    avatar: "https://picsum.photos/seed/sarah/200/200".to_string(),
});

/// The fixed record for a role. Repeated logins always return the same data.
pub fn user_for(role: Role) -> User {
    match role {
        Role::Student => MOCK_STUDENT.clone(),
        Role::Teacher => MOCK_TEACHER.clone(),
    }
}

pub fn initial_documents() -> Vec<Document> {
    vec![
        seed_document(
            "1",
            "Fall 2023 Fee Receipt.pdf",
            DocCategory::FeeReceipt,
            ReviewState::Approved {
                fingerprint: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                    .to_string(),
            },
            date(2023, 9, 15),
            10,
            "2.4 MB",
        ),
        seed_document(
            "2",
            "AWS Cloud Practitioner Cert.pdf",
            DocCategory::Certificate,
            ReviewState::Pending,
            date(2024, 2, 10),
            50,
            "1.8 MB",
        ),
        seed_document(
            "3",
            "Mid-term Results Sem 5.pdf",
            DocCategory::ExamResult,
            ReviewState::Approved {
                fingerprint: "d6a99264c9f139d89264c9f139d8d6a99264c9f139d89264c9f139d8d6a99264"
                    .to_string(),
            },
            date(2023, 11, 20),
            15,
            "0.9 MB",
        ),
        seed_document(
            "4",
            "Hackathon Participation.pdf",
            DocCategory::Certificate,
            ReviewState::Rejected {
                reason: "Invalid signature. Please re-upload with official seal.".to_string(),
            },
            date(2024, 1, 5),
            20,
            "3.1 MB",
        ),
        seed_document(
            "5",
            "Spring 2024 Hall Ticket.pdf",
            DocCategory::HallTicket,
            ReviewState::Approved {
                fingerprint: "4d5e6f7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v3w4x5y6z7a8b9c0d1e2f3g4h5"
                    .to_string(),
            },
            date(2024, 3, 1),
            5,
            "1.2 MB",
        ),
        seed_document(
            "6",
            "Robotics Workshop Cert.pdf",
            DocCategory::Certificate,
            ReviewState::Pending,
            date(2024, 3, 12),
            30,
            "2.2 MB",
        ),
    ]
}

fn seed_document(
    id: &str,
    name: &str,
    category: DocCategory,
    review: ReviewState,
    upload_date: NaiveDate,
    points: u32,
    size: &str,
) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        category,
        review,
        upload_date,
        points,
        size: size.to_string(),
        owner: MOCK_STUDENT.name.clone(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocStatus;

    #[test]
    fn seed_collection_has_two_pending_submissions() {
        let documents = initial_documents();
        assert_eq!(documents.len(), 6);
        assert_eq!(documents.iter().filter(|d| d.is_pending()).count(), 2);
    }

    #[test]
    fn seed_documents_satisfy_the_review_invariant() {
        for doc in initial_documents() {
            match doc.status() {
                DocStatus::Approved => assert!(doc.fingerprint().is_some(), "{}", doc.name),
                DocStatus::Rejected => assert!(doc.rejection_reason().is_some(), "{}", doc.name),
                DocStatus::Pending => {
                    assert!(doc.fingerprint().is_none() && doc.rejection_reason().is_none())
                }
            }
        }
    }
}
