//! Part names inside an OPC package.
//!
//! A PackURI is an absolute, slash-separated part name such as
//! `/ppt/slides/slide1.xml`. Relationship targets are stored relative to the
//! directory of their source part, so most of this module is about moving
//! between the two forms.

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// An absolute part name within an OPC package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/ppt/presentation.xml")
    uri: String,
}

impl PackURI {
    /// Create a new PackURI from a string.
    ///
    /// Returns an error message if the URI does not begin with a slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Part name of the n-th slide (1-based), `/ppt/slides/slide{n}.xml`.
    pub fn slide(n: usize) -> Self {
        PackURI {
            uri: format!("/ppt/slides/slide{}.xml", n),
        }
    }

    /// Part name of the n-th slide layout (1-based).
    pub fn slide_layout(n: usize) -> Self {
        PackURI {
            uri: format!("/ppt/slideLayouts/slideLayout{}.xml", n),
        }
    }

    /// Resolve a relationship target against the directory of its source.
    ///
    /// `("/ppt/slides", "../slideLayouts/slideLayout1.xml")` resolves to
    /// `/ppt/slideLayouts/slideLayout1.xml`.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        // Absolute targets ignore the base
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                other => segments.push(other),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// Directory portion, `/ppt/slides` for `/ppt/slides/slide1.xml`.
    ///
    /// Parts at the package root and the package itself return "/".
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// File name portion, empty for the package pseudo-partname.
    pub fn filename(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or("")
    }

    /// Extension without the leading period.
    pub fn ext(&self) -> &str {
        self.filename()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// Numeric suffix of tuple partnames, 21 for `/ppt/slides/slide21.xml`.
    pub fn idx(&self) -> Option<u32> {
        let stem = self
            .filename()
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or_else(|| self.filename());
        let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 || digits == stem.len() {
            return None;
        }
        stem[stem.len() - digits..].parse().ok()
    }

    /// Zip member name: the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Relative reference from a base directory to this part, the form
    /// written into `Target` attributes.
    ///
    /// `/ppt/slideLayouts/slideLayout1.xml` seen from `/ppt/slides` is
    /// `../slideLayouts/slideLayout1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments = vec![".."; from.len() - common];
        segments.extend_from_slice(&to[common..]);
        segments.join("/")
    }

    /// Part name of the relationships part belonging to this part.
    ///
    /// `/ppt/_rels/presentation.xml.rels` for `/ppt/presentation.xml`,
    /// `/_rels/.rels` for the package itself.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        if base_uri == "/" {
            Self::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base_uri, self.filename()))
        }
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_requires_slash() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new("ppt/presentation.xml").is_err());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::slide(3);
        assert_eq!(uri.as_str(), "/ppt/slides/slide3.xml");
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide3.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.idx(), Some(3));
        assert_eq!(uri.membername(), "ppt/slides/slide3.xml");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
        assert_eq!(PackURI::new("/ppt/presentation.xml").unwrap().idx(), None);
    }

    #[test]
    fn test_relative_ref_round_trips_through_from_rel_ref() {
        let layout = PackURI::slide_layout(6);
        let rel = layout.relative_ref("/ppt/slides");
        assert_eq!(rel, "../slideLayouts/slideLayout6.xml");
        assert_eq!(PackURI::from_rel_ref("/ppt/slides", &rel).unwrap(), layout);

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pres.relative_ref("/"), "ppt/presentation.xml");
        assert_eq!(pres.relative_ref("/ppt"), "presentation.xml");
    }

    #[test]
    fn test_rels_uri() {
        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(
            pres.rels_uri().unwrap().as_str(),
            "/ppt/_rels/presentation.xml.rels"
        );
    }
}
