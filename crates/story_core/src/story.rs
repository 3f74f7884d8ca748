use serde::{Deserialize, Serialize};

/// Opaque, server-assigned story identifier.
pub type StoryId = String;

/// One submitted story as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    #[serde(rename = "storyId")]
    pub story_id: StoryId,
    pub title: String,
    pub author: String,
    pub url: String,
    /// Username of the submitter.
    pub username: String,
}

impl StoryRecord {
    /// Displayable host of the story's URL.
    pub fn host_name(&self) -> String {
        host_name_of(&self.url)
    }
}

/// Form values for a story the server has not accepted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Derive a displayable host name from a story URL.
///
/// Malformed or host-less URLs degrade to the raw input; the renderer must
/// not reject a record the server accepted.
pub fn host_name_of(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::host_name_of;

    #[test]
    fn well_formed_url_yields_host() {
        assert_eq!(host_name_of("https://example.com/x?q=1"), "example.com");
        assert_eq!(host_name_of("http://news.example.org"), "news.example.org");
    }

    #[test]
    fn malformed_url_degrades_to_input() {
        assert_eq!(host_name_of("not a url"), "not a url");
        assert_eq!(host_name_of(""), "");
    }

    #[test]
    fn hostless_url_degrades_to_input() {
        assert_eq!(
            host_name_of("mailto:someone@example.com"),
            "mailto:someone@example.com"
        );
    }
}
