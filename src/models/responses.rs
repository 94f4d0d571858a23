use serde::{Deserialize, Serialize};
use std::path::Path;

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// A downloaded resume file
#[derive(Debug, Clone)]
pub struct ResumeFile {
    /// Filename from `Content-Disposition`, when the backend sent one
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Name to save the file under inside a user-chosen directory.
    ///
    /// Only the last path component of the backend's filename is kept, so the
    /// file can never land outside that directory. Falls back to `fallback`
    /// (then to `resume`) and adds an extension from the content type when the
    /// name has none.
    pub fn save_name(&self, fallback: &str) -> String {
        let stem = self
            .file_name
            .as_deref()
            .and_then(safe_file_name)
            .or_else(|| safe_file_name(fallback))
            .unwrap_or_else(|| "resume".to_string());

        if Path::new(&stem).extension().is_some() {
            return stem;
        }
        match extension_for(&self.content_type) {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem,
        }
    }
}

/// Last component of `name`, or `None` if nothing usable is left
fn safe_file_name(name: &str) -> Option<String> {
    // Backslashes are separators on Windows; treat them as such everywhere
    let unified = name.replace('\\', "/");
    let last = Path::new(&unified).file_name()?.to_str()?.trim();
    if last.is_empty() || last == "." || last == ".." {
        return None;
    }
    Some(last.to_string())
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "application/pdf" => Some("pdf"),
        "application/msword" => Some("doc"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Some("docx"),
        "text/plain" => Some("txt"),
        "application/rtf" | "text/rtf" => Some("rtf"),
        _ => None,
    }
}

/// Extract the filename from a `Content-Disposition` header value.
///
/// `filename*=` (RFC 5987, percent-encoded) wins over `filename=`; parameter
/// names are matched case-insensitively.
pub fn parse_content_disposition(value: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for part in value.split(';').map(str::trim) {
        let Some((key, raw)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                // charset'language'percent-encoded-value
                let encoded = raw.trim().rsplit('\'').next().unwrap_or_default();
                extended = urlencoding::decode(encoded).ok().map(|name| name.into_owned());
            }
            "filename" => plain = Some(raw.trim().trim_matches('"').to_string()),
            _ => {}
        }
    }

    extended
        .filter(|name| !name.is_empty())
        .or(plain)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition() {
        assert_eq!(
            parse_content_disposition(r#"attachment; filename="Jane Doe.pdf""#),
            Some("Jane Doe.pdf".to_string())
        );
        assert_eq!(parse_content_disposition("attachment"), None);
        assert_eq!(parse_content_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn test_content_disposition_variants() {
        assert_eq!(
            parse_content_disposition(r#"Attachment; FileName="Asha""#),
            Some("Asha".to_string())
        );
        assert_eq!(
            parse_content_disposition(
                r#"attachment; filename="fallback"; filename*=UTF-8''Jos%C3%A9%20Ruiz.pdf"#
            ),
            Some("José Ruiz.pdf".to_string())
        );
    }

    fn file(name: Option<&str>, content_type: &str) -> ResumeFile {
        ResumeFile {
            file_name: name.map(str::to_string),
            content_type: content_type.to_string(),
            bytes: Vec::new(),
        }
    }

    #[test]
    fn test_save_name_stays_inside_directory() {
        let dir = Path::new("/home/user/resumes");

        for hostile in ["../../x", "/etc/x", "..\\..\\x", "a/../../x"] {
            let name = file(Some(hostile), "application/pdf").save_name("r1");
            assert_eq!(name, "x.pdf", "{} was not reduced", hostile);
            let target = dir.join(&name);
            assert_eq!(target.parent(), Some(dir));
        }
    }

    #[test]
    fn test_save_name_falls_back_to_resume_id() {
        for unusable in ["..", ".", "", "/", "dir/.."] {
            let name = file(Some(unusable), "application/octet-stream").save_name("r123");
            assert_eq!(name, "r123", "{:?} should fall back", unusable);
        }
        assert_eq!(file(None, "application/pdf").save_name("r123"), "r123.pdf");
        assert_eq!(file(None, "text/plain").save_name(".."), "resume.txt");
    }

    #[test]
    fn test_save_name_adds_extension_only_when_missing() {
        assert_eq!(file(Some("Asha Rao"), "application/pdf").save_name("r1"), "Asha Rao.pdf");
        assert_eq!(
            file(Some("Asha Rao.docx"), "application/pdf").save_name("r1"),
            "Asha Rao.docx"
        );
        assert_eq!(
            file(
                Some("cv"),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            )
            .save_name("r1"),
            "cv.docx"
        );
    }
}
