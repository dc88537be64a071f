//! Resolves author and committer identities from the environment.
//!
//! | Variable              | Default                     |
//! |-----------------------|-----------------------------|
//! | `GIT_AUTHOR_NAME`     | `unknown`                   |
//! | `GIT_AUTHOR_EMAIL`    | empty                       |
//! | `GIT_AUTHOR_DATE`     | current time, `+0000`       |
//! | `GIT_COMMITTER_NAME`  | author name                 |
//! | `GIT_COMMITTER_EMAIL` | author email                |
//! | `GIT_COMMITTER_DATE`  | current time, `+0000`       |
//!
//! Dates are given as `<seconds since epoch> <+hhmm>`.

use minigit_core::object::Attribution;

use crate::Result;

const DEFAULT_NAME: &str = "unknown";

pub(crate) fn author<F>(var: F, now: i64) -> Result<Attribution>
where
    F: Fn(&str) -> Option<String>,
{
    let name = var("GIT_AUTHOR_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string());
    let email = var("GIT_AUTHOR_EMAIL").unwrap_or_default();
    let (timestamp, tz_offset) = date(&var, "GIT_AUTHOR_DATE", now)?;

    Ok(Attribution::new(&name, &email, timestamp, tz_offset)?)
}

pub(crate) fn committer<F>(var: F, now: i64) -> Result<Attribution>
where
    F: Fn(&str) -> Option<String>,
{
    let name = var("GIT_COMMITTER_NAME")
        .or_else(|| var("GIT_AUTHOR_NAME"))
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    let email = var("GIT_COMMITTER_EMAIL")
        .or_else(|| var("GIT_AUTHOR_EMAIL"))
        .unwrap_or_default();
    let (timestamp, tz_offset) = date(&var, "GIT_COMMITTER_DATE", now)?;

    Ok(Attribution::new(&name, &email, timestamp, tz_offset)?)
}

fn date<F>(var: &F, key: &str, now: i64) -> Result<(i64, i16)>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => parse_date(&value)
            .ok_or_else(|| format!("{} must look like `1142878501 +0230`, not {:?}", key, value).into()),
        None => Ok((now, 0)),
    }
}

fn parse_date(s: &str) -> Option<(i64, i16)> {
    let mut words = s.split_whitespace();
    let timestamp = words.next()?.parse::<i64>().ok()?;
    let tz = words.next()?;
    if words.next().is_some() {
        return None;
    }

    Some((timestamp, tz_from_str(tz)?))
}

fn tz_from_str(s: &str) -> Option<i16> {
    let s = s.as_bytes();
    if s.len() != 5 || !s[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sign: i16 = match s[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let digit = |i: usize| (s[i] - b'0') as i16;
    let hh = digit(1) * 10 + digit(2);
    let mm = digit(3) * 10 + digit(4);
    if mm >= 60 {
        return None;
    }

    Some(sign * (hh * 60 + mm))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let a = author(env(&[]), 1_600_000_000).unwrap();
        assert_eq!(a.to_string(), "unknown <> 1600000000 +0000");

        let c = committer(env(&[]), 1_600_000_000).unwrap();
        assert_eq!(c.to_string(), "unknown <> 1600000000 +0000");
    }

    #[test]
    fn from_environment() {
        let vars = env(&[
            ("GIT_AUTHOR_NAME", "A U Thor"),
            ("GIT_AUTHOR_EMAIL", "author@example.com"),
            ("GIT_AUTHOR_DATE", "1142878501 +0230"),
            ("GIT_COMMITTER_NAME", "C O Mitter"),
            ("GIT_COMMITTER_EMAIL", "committer@example.com"),
            ("GIT_COMMITTER_DATE", "1142878502 -0700"),
        ]);

        let a = author(&vars, 0).unwrap();
        assert_eq!(
            a.to_string(),
            "A U Thor <author@example.com> 1142878501 +0230"
        );

        let c = committer(&vars, 0).unwrap();
        assert_eq!(
            c.to_string(),
            "C O Mitter <committer@example.com> 1142878502 -0700"
        );
    }

    #[test]
    fn committer_falls_back_to_author() {
        let vars = env(&[
            ("GIT_AUTHOR_NAME", "A U Thor"),
            ("GIT_AUTHOR_EMAIL", "author@example.com"),
            ("GIT_AUTHOR_DATE", "1142878501 +0230"),
        ]);

        let c = committer(&vars, 1_142_878_999).unwrap();
        assert_eq!(
            c.to_string(),
            "A U Thor <author@example.com> 1142878999 +0000"
        );
    }

    #[test]
    fn bad_dates() {
        for bad in &[
            "yesterday",
            "1142878501",
            "1142878501 0230",
            "1142878501 +02:30",
            "1142878501 +0260",
            "1142878501 +0230 extra",
        ] {
            let vars = env(&[("GIT_AUTHOR_DATE", *bad)]);
            let err = author(&vars, 0).unwrap_err();
            assert!(err.to_string().starts_with("GIT_AUTHOR_DATE must look like"));
        }
    }

    #[test]
    fn out_of_range_timezone() {
        let vars = env(&[("GIT_AUTHOR_DATE", "1142878501 +1500")]);
        let err = author(&vars, 0).unwrap_err();
        assert_eq!(err.to_string(), "illegal time zone offset: 900");
    }
}
