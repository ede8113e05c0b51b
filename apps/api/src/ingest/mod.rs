// Resume upload: PDF / DOCX / TXT bytes to plain text.

pub mod file_loader;
pub mod handlers;
