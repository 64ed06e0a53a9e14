mod payment;
mod uploader;

pub use payment::{PaymentSimulator, PlanUpgrade};
pub use uploader::{
    AttachedFile, CertificateSubmission, PersonalUpload, SubmissionCategory, UploadSimulator,
};
