use serde::Serialize;

/// One selectable entry in the form's mimetype filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MimetypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The fixed set of document types the extraction form offers, in display order.
pub const SUPPORTED_MIMETYPES: [MimetypeOption; 11] = [
    MimetypeOption {
        value: "application/pdf",
        label: "PDF",
    },
    MimetypeOption {
        value: "application/msword",
        label: "Word (.doc)",
    },
    MimetypeOption {
        value: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        label: "Word (.docx)",
    },
    MimetypeOption {
        value: "application/vnd.ms-excel",
        label: "Excel (.xls)",
    },
    MimetypeOption {
        value: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        label: "Excel (.xlsx)",
    },
    MimetypeOption {
        value: "application/vnd.ms-powerpoint",
        label: "PowerPoint (.ppt)",
    },
    MimetypeOption {
        value: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        label: "PowerPoint (.pptx)",
    },
    MimetypeOption {
        value: "image/jpeg",
        label: "JPEG images",
    },
    MimetypeOption {
        value: "image/png",
        label: "PNG images",
    },
    MimetypeOption {
        value: "text/plain",
        label: "Plain text",
    },
    MimetypeOption {
        value: "text/html",
        label: "HTML",
    },
];
