//! Instruction templates — one fixed prefix per task.
//!
//! These templates are the contract between redraft and the model: each
//! task's instruction is concatenated directly onto the user text, with
//! no separator, and sent as the request's text part.

/// Model named in every request.
pub const MODEL: &str = "gpt-4o-mini";

/// Appended verbatim to the configured API host.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const IMAGE_TO_TEXT: &str = "You are a text extraction expert. Extract text from the following image(s), maintaining layout and structure. Output extracted text directly without any additional text. Image data: ";
pub const PROOFREAD: &str = "You are a professional proofreader. Review and correct the following text for grammar, spelling, and clarity. Output corrected text directly without any additional text: ";
pub const REWRITE: &str = "You are a content rewriter. Rewrite the following text while preserving its core meaning. Output rewritten text directly without any additional text: ";
pub const FRIENDLY: &str = "You are a tone adjustment expert. Make the following text more warm and friendly while keeping the main message. Output friendly text directly without any additional text: ";
pub const PROFESSIONAL: &str = "You are a business writing expert. Convert the following text into professional business language. Output professional text directly without any additional text: ";
pub const CONCISE: &str = "You are a conciseness expert. Make this text more concise while keeping all important information. Output concise text directly without any additional text: ";
pub const SUMMARY: &str = "You are a summarization expert. Create a comprehensive summary of the following text. Output summary directly without any additional text: ";
pub const KEY_POINTS: &str = "You are a key points expert. Extract and list the main points from the following text. Output key points directly without any additional text: ";
pub const LIST: &str = "You are a list formatting expert. Convert this text into a well-organized list format. Output list directly without any additional text: ";
pub const REFORMAT: &str = "You are a text formatting expert. Reformat this text to improve its structure and readability while maintaining the content. Fix spacing, line breaks, and paragraphs. Output reformatted text directly without any additional text: ";
pub const TABLE: &str = "You are a data organization expert. Convert this information into a clear table format. Output table directly without any additional text: ";

/// Resolve a task identifier to its instruction template.
///
/// Unknown identifiers return `None`; callers treat that as an empty
/// template, not an error.
pub fn instruction_for(task: &str) -> Option<&'static str> {
    match task {
        "imagetotext" => Some(IMAGE_TO_TEXT),
        "proofread" => Some(PROOFREAD),
        "rewrite" => Some(REWRITE),
        "friendly" => Some(FRIENDLY),
        "professional" => Some(PROFESSIONAL),
        "concise" => Some(CONCISE),
        "summary" => Some(SUMMARY),
        "keypoints" => Some(KEY_POINTS),
        "list" => Some(LIST),
        "reformat" => Some(REFORMAT),
        "table" => Some(TABLE),
        _ => None,
    }
}

/// Task identifiers with the descriptions shown by `redraft tasks`.
pub const TASKS: &[(&str, &str)] = &[
    ("imagetotext", "Extract text from one or more images"),
    ("proofread", "Fix grammar, spelling, and clarity"),
    ("rewrite", "Rewrite while preserving meaning"),
    ("friendly", "Make the tone warmer and friendlier"),
    ("professional", "Convert to business language"),
    ("concise", "Tighten without losing information"),
    ("summary", "Produce a comprehensive summary"),
    ("keypoints", "Extract the main points"),
    ("list", "Convert into an organized list"),
    ("reformat", "Fix structure, spacing, and paragraphs"),
    ("table", "Organize into a table"),
];
