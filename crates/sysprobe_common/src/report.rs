//! The diagnostic run: six steps written in a fixed order.
//!
//! Step failures are printed and the run carries on. Only errors from the
//! output writers stop it.

use crate::align::aligned_size;
use crate::buffer::{blank_padding, has_terminator, make_tagline, place_tagline};
use crate::clock::format_timestamp;
use crate::error::ProbeError;
use crate::identity::IdentitySource;
use crate::layout::ProbeLayout;
use crate::username::{email_for, normalize_username};
use chrono::{DateTime, FixedOffset};
use std::io::Write;
use tracing::{debug, warn};

/// What a run found, for the caller's logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub username: String,
    pub hostname: String,
    pub email: String,
    pub identity_ok: bool,
    pub tagline_aligned: bool,
}

pub struct Probe<S> {
    layout: ProbeLayout,
    source: S,
}

impl<S: IdentitySource> Probe<S> {
    pub fn new(source: S) -> Self {
        Self {
            layout: ProbeLayout::default(),
            source,
        }
    }

    pub fn with_layout(mut self, layout: ProbeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Run every step against `now`, writing results to `out` and failures to `err`
    pub fn run<O, E>(
        &self,
        now: &DateTime<FixedOffset>,
        out: &mut O,
        err: &mut E,
    ) -> Result<Outcome, ProbeError>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let mut outcome = Outcome::default();

        self.print_time(now, out)?;
        self.resolve_identity(&mut outcome, out)?;
        self.print_username(&mut outcome, out)?;
        self.print_padding(out)?;
        outcome.tagline_aligned = self.print_tagline(out, err)?;
        self.print_alignment(out)?;

        Ok(outcome)
    }

    fn print_time<O: Write + ?Sized>(
        &self,
        now: &DateTime<FixedOffset>,
        out: &mut O,
    ) -> Result<(), ProbeError> {
        let stamp = format_timestamp(now);
        debug!(step = "time", %stamp);
        writeln!(out, "Now is {}", stamp)?;
        Ok(())
    }

    fn resolve_identity<O: Write + ?Sized>(
        &self,
        outcome: &mut Outcome,
        out: &mut O,
    ) -> Result<(), ProbeError> {
        let mut ok = true;

        match self.source.current_user() {
            Ok(identity) => {
                writeln!(out, "Whoami: {}", identity)?;
                writeln!(out, "I am {}", identity.username)?;
                outcome.username = identity.username;
            }
            Err(e) => {
                warn!(step = "identity", kind = e.kind(), error = %e);
                writeln!(out, "{}", e)?;
                ok = false;
            }
        }

        match self.source.hostname() {
            Ok(hostname) => {
                writeln!(out, "Hostname: {}", hostname)?;
                outcome.hostname = hostname;
            }
            Err(e) => {
                warn!(step = "identity", kind = e.kind(), error = %e);
                writeln!(out, "{}", e)?;
                ok = false;
            }
        }

        outcome.identity_ok = ok;
        debug!(step = "identity", username = %outcome.username, hostname = %outcome.hostname, ok);
        Ok(())
    }

    fn print_username<O: Write + ?Sized>(
        &self,
        outcome: &mut Outcome,
        out: &mut O,
    ) -> Result<(), ProbeError> {
        outcome.username = normalize_username(&outcome.username, &outcome.hostname);
        outcome.email = email_for(&outcome.username, &outcome.hostname);
        debug!(step = "username", username = %outcome.username, email = %outcome.email);

        writeln!(out, "username={}", outcome.username)?;
        writeln!(out, "email: <{}>", outcome.email)?;
        Ok(())
    }

    fn print_padding<O: Write + ?Sized>(&self, out: &mut O) -> Result<(), ProbeError> {
        let blanks = blank_padding(self.layout.blank_width);
        writeln!(out, "len:{} '{}'", blanks.len(), blanks)?;
        Ok(())
    }

    fn print_tagline<O, E>(&self, out: &mut O, err: &mut E) -> Result<bool, ProbeError>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let layout = &self.layout;
        let mut buf = vec![0u8; layout.buffer_len];
        let tagline = make_tagline(&layout.tag_word, layout.tail_len());

        if !has_terminator(&tagline) {
            warn!(step = "tagline", "tagline lacks NUL terminator");
            writeln!(out, "expected zero byte at end of slice")?;
        }
        writeln!(out, "len={} tagline='{}'", tagline.len(), tagline)?;

        let placement = match place_tagline(&mut buf, &tagline, layout.orig_offset) {
            Ok(placement) => placement,
            Err(e) => {
                warn!(step = "tagline", kind = e.kind(), error = %e);
                writeln!(err, "Failed! {}", e)?;
                return Ok(false);
            }
        };

        debug!(step = "tagline", offset = placement.offset, copied = placement.copied);
        let aligned = placement.is_aligned(layout.orig_offset);
        if aligned {
            writeln!(
                out,
                "Success! {}+{} == {}",
                placement.offset, placement.copied, layout.orig_offset
            )?;
        } else {
            warn!(step = "tagline", end = placement.end(), "tagline copy misaligned");
            writeln!(
                err,
                "Failed! {}+{} != {}",
                placement.offset, placement.copied, layout.orig_offset
            )?;
        }
        Ok(aligned)
    }

    fn print_alignment<O: Write + ?Sized>(&self, out: &mut O) -> Result<(), ProbeError> {
        let layout = &self.layout;
        for len in layout.align_lengths.clone() {
            let size = aligned_size(layout.align_base, len, layout.align_header, layout.align_to);
            debug!(step = "align", len, size);
            writeln!(out, "L={} size={}", len, size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use chrono::TimeZone;
    use std::path::PathBuf;

    struct Fixed;

    impl IdentitySource for Fixed {
        fn current_user(&self) -> Result<Identity, ProbeError> {
            Ok(Identity {
                uid: 1000,
                gid: 1000,
                username: "host\\bob".to_string(),
                name: "Bob".to_string(),
                home_dir: PathBuf::from("/home/bob"),
            })
        }

        fn hostname(&self) -> Result<String, ProbeError> {
            Ok("host".to_string())
        }
    }

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_outcome() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = Probe::new(Fixed).run(&now(), &mut out, &mut err).unwrap();

        assert_eq!(outcome.username, "bob");
        assert_eq!(outcome.hostname, "host");
        assert_eq!(outcome.email, "bob@host");
        assert!(outcome.identity_ok);
        assert!(outcome.tagline_aligned);
        assert!(err.is_empty());
    }

    #[test]
    fn test_oversized_tagline_goes_to_stderr() {
        let layout = ProbeLayout {
            orig_offset: 4,
            ..ProbeLayout::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = Probe::new(Fixed)
            .with_layout(layout)
            .run(&now(), &mut out, &mut err)
            .unwrap();

        assert!(!outcome.tagline_aligned);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Failed! tagline of "));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("L=19 size=88"));
    }

    #[test]
    fn test_tagline_counts_buffer_tail() {
        let layout = ProbeLayout {
            buffer_len: 100,
            ..ProbeLayout::default()
        };
        let tail = layout.tail_len();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = Probe::new(Fixed)
            .with_layout(layout)
            .run(&now(), &mut out, &mut err)
            .unwrap();

        assert_eq!(tail, 60);
        assert!(outcome.tagline_aligned);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("len=10 tagline='commit 60\0'\n"));
        assert!(out.contains("Success! 30+10 == 40\n"));
    }

    #[test]
    fn test_short_buffer_reports_mismatch() {
        let layout = ProbeLayout {
            buffer_len: 32,
            ..ProbeLayout::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = Probe::new(Fixed)
            .with_layout(layout)
            .run(&now(), &mut out, &mut err)
            .unwrap();

        // Tail is 0 so the tagline is "commit 0\0" at offset 31, of which 1 byte fits
        assert!(!outcome.tagline_aligned);
        assert_eq!(String::from_utf8(err).unwrap(), "Failed! 31+1 != 40\n");
        assert!(!String::from_utf8(out).unwrap().contains("Success!"));
    }
}
