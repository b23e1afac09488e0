use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;

const SEPARATOR: char = '/';

/// A hierarchical reference to the comment thread of an article,
/// e.g. `project/a-project`.
///
/// The last segment is the slug, all preceding segments
/// form the directory prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugPath {
    prefix: Vec<String>,
    slug: String,
}

impl SlugPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// The directory of this thread below `root`.
    pub fn to_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        let mut path = root.as_ref().to_path_buf();
        path.extend(&self.prefix);
        path.push(&self.slug);
        path
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugPathError {
    #[error("The slug path is empty")]
    Empty,
    #[error("Invalid path segment {0:?}")]
    InvalidSegment(String),
}

fn is_valid_segment(segment: &str) -> bool {
    segment != ".." && !segment.contains(['\\', '\0'])
}

impl FromStr for SlugPath {
    type Err = SlugPathError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s
            .split(SEPARATOR)
            .filter(|s| !s.is_empty() && *s != ".")
            .map(|s| {
                if is_valid_segment(s) {
                    Ok(s.to_owned())
                } else {
                    Err(SlugPathError::InvalidSegment(s.to_owned()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let slug = segments.pop().ok_or(SlugPathError::Empty)?;
        Ok(Self {
            prefix: segments,
            slug,
        })
    }
}

impl fmt::Display for SlugPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for segment in &self.prefix {
            write!(f, "{segment}{SEPARATOR}")?;
        }
        f.write_str(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_slug() {
        let path: SlugPath = "example".parse().unwrap();
        assert_eq!(path.slug(), "example");
        assert!(path.prefix().is_empty());
    }

    #[test]
    fn parse_nested_slug() {
        let path: SlugPath = "project/a-project".parse().unwrap();
        assert_eq!(path.slug(), "a-project");
        assert_eq!(path.prefix(), ["project"]);
        assert_eq!(path.to_string(), "project/a-project");
    }

    #[test]
    fn skip_empty_and_current_dir_segments() {
        let path: SlugPath = "/./project//./a-project/".parse().unwrap();
        assert_eq!(path.slug(), "a-project");
        assert_eq!(path.prefix(), ["project"]);
    }

    #[test]
    fn reject_parent_dir_segments() {
        assert_eq!(
            "../etc/example".parse::<SlugPath>(),
            Err(SlugPathError::InvalidSegment("..".into()))
        );
        assert_eq!(
            "project/../example".parse::<SlugPath>(),
            Err(SlugPathError::InvalidSegment("..".into()))
        );
    }

    #[test]
    fn reject_backslashes() {
        assert!(matches!(
            r"..\..\example".parse::<SlugPath>(),
            Err(SlugPathError::InvalidSegment(_))
        ));
    }

    #[test]
    fn reject_empty_paths() {
        assert_eq!("".parse::<SlugPath>(), Err(SlugPathError::Empty));
        assert_eq!("/./".parse::<SlugPath>(), Err(SlugPathError::Empty));
    }

    #[test]
    fn resolve_directory_below_root() {
        let path: SlugPath = "project/a-project".parse().unwrap();
        assert_eq!(
            path.to_path("comments"),
            Path::new("comments").join("project").join("a-project")
        );
    }
}
