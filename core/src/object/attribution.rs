use std::fmt;

use super::MalformedObject;

/// An `Attribution` combines a person's identity (name and e-mail address)
/// with the timestamp for a particular action.
///
/// Attributions are associated with the author and committer of a commit.
/// They are resolved by the caller and captured by value when the commit is
/// encoded, so a commit's identity never depends on when it is read.
///
/// The `timestamp` value is in seconds relative to the Unix epoch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribution {
    name: String,
    email: String,
    timestamp: i64,
    tz_offset: i16,
}

impl Attribution {
    /// Creates a new attribution.
    ///
    /// `tz_offset` is given in minutes relative to GMT and must lie between
    /// -720 and +840 inclusive.
    pub fn new(
        name: &str,
        email: &str,
        timestamp: i64,
        tz_offset: i16,
    ) -> Result<Attribution, MalformedObject> {
        if tz_offset < -720 || tz_offset > 840 {
            return Err(MalformedObject::InvalidTimezone(tz_offset));
        }

        Ok(Attribution {
            name: name.to_string(),
            email: email.to_string(),
            timestamp,
            tz_offset,
        })
    }

    /// Returns the person's human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the timezone offset (minutes relative to GMT).
    pub fn tz_offset(&self) -> i16 {
        self.tz_offset
    }

    /// Returns the timezone formatted in human readable offset from GMT.
    pub fn format_tz(&self) -> String {
        let sign = if self.tz_offset < 0 { "-" } else { "+" };

        let offset = self.tz_offset.abs();
        let hours = offset / 60;
        let min = offset % 60;

        format!("{}{:02}{:02}", sign, hours, min)
    }
}

fn sanitize(s: &str) -> String {
    // Drop control characters (except CR) and angle brackets, which would
    // otherwise corrupt the `name <email>` framing.
    s.trim()
        .chars()
        .filter(|c| !matches!(*c as u32, 0..=12 | 14..=31 | 60 | 62))
        .collect()
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} {}",
            sanitize(&self.name),
            sanitize(&self.email),
            self.timestamp,
            self.format_tz()
        )
    }
}
