// Resume builder: keyword gap analysis against a job post, suggested sections,
// markdown rendering and DOCX export.

pub mod docx;
pub mod handlers;
pub mod keywords;
pub mod sections;
