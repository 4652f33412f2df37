//! Patch session orchestration.
//!
//! A session loads one dump, validates it once, applies the edits the
//! operator picks and saves the result to a new file. Nothing touches disk
//! before the final save, and the first failing step aborts the session with
//! its error.
//!
//! Three flows are provided:
//!
//! - [`Session::run`]: the operator's own dump, each edit confirmed with a
//!   yes/no question (or verify-only)
//! - [`Session::run_template`]: a stock template dump for a chosen firmware
//!   release, every field asked for unconditionally
//! - [`Session::run_batch`]: edits given up front as a [`PatchPlan`]

mod plan;
mod prompter;

pub use plan::*;
pub use prompter::*;

use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::dump::{Dump, PATCHED_SUFFIX};
use crate::editor::FieldEditor;
use crate::error::{Error, Result};
use crate::layout::{FirmwareProfile, FirmwareVersion, g3};
use crate::serial::{SerialOccurrence, find_serials};
use crate::validate;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Verify-only run; nothing was written
    Verified { serials: Vec<SerialOccurrence> },
    /// Patched image written to `path`
    Saved { path: PathBuf, edits: Vec<Edit> },
}

/// Ask the operator for a dump file, offering the first candidate as default
pub fn choose_input<P: Prompter>(prompter: &P, candidates: &[String]) -> Result<PathBuf> {
    let default = candidates.first().map(String::as_str);
    let prompt = match default {
        Some(name) => format!("Enter filename [default: {}]: ", name),
        None => "Enter filename: ".to_string(),
    };

    let answer = prompter.read_filename(&prompt, default)?;
    let name = match answer.trim() {
        "" => default.unwrap_or_default(),
        typed => typed,
    };
    if name.is_empty() {
        return Err(Error::NoFileSelected);
    }

    prompter.display_message(&format!("You selected: {}", name));
    Ok(PathBuf::from(name))
}

/// Ask the operator which firmware release a template is for.
///
/// Accepts the menu number or the version string itself.
pub fn choose_firmware<P: Prompter>(prompter: &P) -> Result<FirmwareVersion> {
    prompter.display_message("Choose firmware version:");
    for (i, version) in FirmwareVersion::iter().enumerate() {
        let beta = if version.is_beta() { " (BETA)" } else { "" };
        prompter.display_message(&format!("{}) {}{}", i + 1, version, beta));
    }

    let answer = prompter.read_line("Enter: ")?;
    let answer = answer.trim();
    let by_number = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| FirmwareVersion::iter().nth(i));
    let version = match by_number {
        Some(version) => version,
        None => FirmwareVersion::parse(answer)?,
    };

    prompter.display_message(&format!("You selected {}", version));
    Ok(version)
}

/// Template file for a release, falling back to the legacy spelling when
/// only that one exists in `dir`
pub fn template_path(dir: &Path, version: FirmwareVersion) -> PathBuf {
    let primary = dir.join(version.template_file());
    if primary.is_file() {
        return primary;
    }
    match version.legacy_template_file() {
        Some(legacy) if dir.join(legacy).is_file() => dir.join(legacy),
        _ => primary,
    }
}

pub struct Session<'a, P: Prompter> {
    profile: &'a FirmwareProfile,
    prompter: &'a P,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(profile: &'a FirmwareProfile, prompter: &'a P) -> Self {
        Self { profile, prompter }
    }

    fn editor(&self) -> FieldEditor<'a> {
        FieldEditor::new(&self.profile.table)
    }

    fn say(&self, message: impl AsRef<str>) {
        self.prompter.display_message(message.as_ref());
    }

    /// Load a dump and validate size, then header
    pub fn open(&self, path: &Path) -> Result<Dump> {
        let dump = Dump::load(path)?;

        validate::check_size(dump.as_bytes(), self.profile.dump_size)?;
        self.say(format!("Len correct: {}", dump.len()));

        validate::check_header(dump.as_bytes(), &self.profile.header)?;
        self.say("VALID header signature. Dump seems to be correct");

        Ok(dump)
    }

    /// Print every non-sentinel serial with its position
    pub fn list_serials(&self, dump: &Dump) -> Vec<SerialOccurrence> {
        let serials = find_serials(dump.as_bytes(), &self.profile.table.serial);
        self.say("Found serial numbers:");
        for serial in &serials {
            self.say(format!("-> {} at 0x{:05X}", serial.as_text(), serial.offset));
        }
        if serials.is_empty() {
            self.prompter.display_warning("No serial numbers found");
        }
        serials
    }

    /// Interactive patch of the operator's own dump
    pub fn run(&self, input: &Path, verify_only: bool) -> Result<SessionOutcome> {
        let mut dump = self.open(input)?;
        let serials = self.list_serials(&dump);

        if verify_only {
            self.say("Verify done. No changes made.");
            return Ok(SessionOutcome::Verified { serials });
        }

        let mut edits = Vec::new();

        if self.prompter.confirm("Do you want to update S/N? (Y/N): ")? {
            edits.push(self.prompt_serial(&mut dump)?);
        }

        self.show_mileage(&dump)?;
        if self.prompter.confirm("Do you want to update mileage? (Y/N): ")? {
            edits.push(self.prompt_mileage(&mut dump)?);
        }

        self.show_speeds(&dump)?;
        if self.prompter.confirm("Do you want to update speed? (Y/N): ")? {
            edits.push(self.prompt_speed(&mut dump)?);
        }

        self.show_key(&dump)?;
        if self
            .prompter
            .confirm("Do you want to transfer secret key from another file? (Y/N): ")?
        {
            edits.push(self.prompt_key(&mut dump)?);
        }

        let path = dump.save_patched(input)?;
        self.say(format!("All changes written to: {}", path.display()));
        Ok(SessionOutcome::Saved { path, edits })
    }

    /// Patch a stock template dump; every field is asked for
    pub fn run_template(
        &self,
        version: FirmwareVersion,
        template_dir: &Path,
        output_dir: &Path,
    ) -> Result<SessionOutcome> {
        let template = template_path(template_dir, version);
        debug!("Using template {}", template.display());
        let mut dump = self.open(&template)?;

        let edits = vec![
            self.prompt_serial(&mut dump)?,
            self.prompt_mileage(&mut dump)?,
            self.prompt_speed(&mut dump)?,
            self.prompt_key(&mut dump)?,
        ];

        let name = template
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| version.template_file().to_string());
        let path = output_dir.join(format!("{}{}", name, PATCHED_SUFFIX));
        dump.save_as(&path)?;
        self.say(format!("All changes written to: {}", path.display()));
        Ok(SessionOutcome::Saved { path, edits })
    }

    /// Apply a prepared plan without prompting
    pub fn run_batch(&self, input: &Path, plan: &PatchPlan) -> Result<SessionOutcome> {
        let mut dump = self.open(input)?;
        self.list_serials(&dump);

        let edits = self.apply_plan(&mut dump, plan)?;
        let path = dump.save_patched(input)?;
        self.say(format!("All changes written to: {}", path.display()));
        Ok(SessionOutcome::Saved { path, edits })
    }

    /// Apply plan entries in the interactive order: serial, mileage, speed, key
    pub fn apply_plan(&self, dump: &mut Dump, plan: &PatchPlan) -> Result<Vec<Edit>> {
        let mut edits = Vec::new();
        if let Some(serial) = &plan.serial {
            edits.push(self.apply_serial(dump, serial)?);
        }
        if let Some(mileage) = &plan.mileage {
            edits.push(self.apply_mileage(dump, mileage)?);
        }
        if let Some(speed) = &plan.speed {
            edits.push(self.apply_speed(dump, speed)?);
        }
        if let Some(source) = &plan.key_source {
            edits.push(self.apply_key(dump, source)?);
        }
        info!("Applied {} edit(s)", edits.len());
        Ok(edits)
    }

    fn show_mileage(&self, dump: &Dump) -> Result<()> {
        let labels = ["A", "B"];
        for (i, mileage) in self.editor().mileage(dump.as_bytes())?.iter().enumerate() {
            let label = labels.get(i).copied().unwrap_or("?");
            self.say(format!("Current mileage {}: {}", label, mileage));
        }
        Ok(())
    }

    fn show_speeds(&self, dump: &Dump) -> Result<()> {
        self.say("Current speed values:");
        for speed in self.editor().speeds(dump.as_bytes())? {
            self.say(format!("-> {} (0x{:02X})", speed, speed));
        }
        Ok(())
    }

    fn show_key(&self, dump: &Dump) -> Result<()> {
        let key = self.editor().secret_key(dump.as_bytes())?;
        self.say(format!("Old key (hex): {}", key.to_hex()));
        self.say(format!("Old key (base64): {}", key.to_base64()));
        Ok(())
    }

    fn prompt_serial(&self, dump: &mut Dump) -> Result<Edit> {
        let length = self.profile.table.serial.length;
        let text = self.prompter.read_line(&format!(
            "Enter new serial number (must be {} characters): ",
            length
        ))?;
        self.apply_serial(dump, &text)
    }

    fn prompt_mileage(&self, dump: &mut Dump) -> Result<Edit> {
        let text = self
            .prompter
            .read_line(&format!("Enter new mileage (0-{}): ", g3::MILEAGE_MAX))?;
        self.apply_mileage(dump, &text)
    }

    fn prompt_speed(&self, dump: &mut Dump) -> Result<Edit> {
        let text = self.prompter.read_line(&format!(
            "Enter new speed ({}-{}): ",
            g3::SPEED_MIN,
            g3::SPEED_MAX
        ))?;
        self.apply_speed(dump, &text)
    }

    fn prompt_key(&self, dump: &mut Dump) -> Result<Edit> {
        let answer = self
            .prompter
            .read_filename("Enter source file name with original key: ", None)?;
        let source = answer.trim();
        if source.is_empty() {
            return Err(Error::NoFileSelected);
        }
        self.apply_key(dump, Path::new(source))
    }

    fn apply_serial(&self, dump: &mut Dump, text: &str) -> Result<Edit> {
        let change = self.editor().set_serial(dump.as_mut_bytes(), text)?;
        self.say(change.to_string());
        Ok(Edit::Serial(change))
    }

    fn apply_mileage(&self, dump: &mut Dump, text: &str) -> Result<Edit> {
        let change = self.editor().set_mileage(dump.as_mut_bytes(), text)?;
        self.say(change.to_string());
        Ok(Edit::Mileage(change))
    }

    fn apply_speed(&self, dump: &mut Dump, text: &str) -> Result<Edit> {
        let change = self.editor().set_speed(dump.as_mut_bytes(), text)?;
        self.say(change.to_string());
        Ok(Edit::Speed(change))
    }

    fn apply_key(&self, dump: &mut Dump, source: &Path) -> Result<Edit> {
        let source = Dump::load(source)?;
        // The key donor only has to be long enough; mismatches are reported
        if let Err(e) = source.validate(self.profile) {
            self.prompter
                .display_warning(&format!("Key source does not look like a valid dump: {}", e));
        }

        let change = self
            .editor()
            .transfer_key(dump.as_mut_bytes(), source.as_bytes())?;
        self.say(format!("New key (hex): {}", change.after.to_hex()));
        self.say(format!("New key (base64): {}", change.after.to_base64()));
        self.say("Secret key transferred into current working data");
        Ok(Edit::Key(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::read_u16_le;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// Prompter that replays canned answers and records output
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: RefCell<VecDeque<String>>,
        messages: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            }
        }

        fn next(&self) -> Result<String> {
            self.answers.borrow_mut().pop_front().ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                ))
            })
        }

        fn remaining(&self) -> usize {
            self.answers.borrow().len()
        }

        fn said(&self, needle: &str) -> bool {
            self.messages.borrow().iter().any(|m| m.contains(needle))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_filename(&self, _prompt: &str, _default: Option<&str>) -> Result<String> {
            self.next()
        }

        fn confirm(&self, _prompt: &str) -> Result<bool> {
            self.next().map(|answer| is_yes(&answer))
        }

        fn read_line(&self, _prompt: &str) -> Result<String> {
            self.next()
        }

        fn display_message(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn display_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    const SERIAL_AT: [usize; 3] = [0x4000, 0x8010, 0x1F600];
    const SENTINEL_AT: usize = 0x6000;

    fn profile() -> FirmwareProfile {
        FirmwareProfile::builtin(FirmwareVersion::V155).unwrap()
    }

    fn valid_dump(profile: &FirmwareProfile) -> Vec<u8> {
        let mut buf = vec![0u8; profile.dump_size];
        buf[..profile.header.len()].copy_from_slice(profile.header.as_bytes());
        for offset in SERIAL_AT {
            buf[offset..offset + 14].copy_from_slice(b"1CGX1234567890");
        }
        buf[SENTINEL_AT..SENTINEL_AT + 14].copy_from_slice(b"1CGC0000000001");
        buf[0x1F0C4] = 0x10;
        buf[0x1F4C4] = 0x10;
        buf
    }

    fn write_dump(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_verify_only_lists_serials_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let input = write_dump(dir.path(), "vcu.bin", &valid_dump(&profile));
        let prompter = ScriptedPrompter::new(&[]);

        let outcome = Session::new(&profile, &prompter).run(&input, true).unwrap();
        let SessionOutcome::Verified { serials } = outcome else {
            panic!("expected verify outcome");
        };
        assert_eq!(
            serials.iter().map(|s| s.offset).collect::<Vec<_>>(),
            SERIAL_AT.to_vec()
        );
        assert!(prompter.said("VALID header signature"));
        assert!(prompter.said("-> 1CGX1234567890 at 0x04000"));
        assert!(!dir.path().join("vcu.bin.patched.bin").exists());
    }

    #[test]
    fn test_full_interactive_session() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let original = valid_dump(&profile);
        let input = write_dump(dir.path(), "vcu.bin", &original);

        let mut donor = valid_dump(&profile);
        let key: Vec<u8> = (0xA0..0xAC).collect();
        donor[0x1F5B4..0x1F5C0].copy_from_slice(&key);
        let donor_path = write_dump(dir.path(), "donor.bin", &donor);
        let donor_arg = donor_path.to_string_lossy().into_owned();

        let prompter = ScriptedPrompter::new(&[
            "y",
            "1cga11112222aa",
            "Y",
            "100",
            "yes",
            "25",
            "y",
            &donor_arg,
        ]);
        let outcome = Session::new(&profile, &prompter).run(&input, false).unwrap();

        let SessionOutcome::Saved { path, edits } = outcome else {
            panic!("expected saved outcome");
        };
        assert_eq!(path, dir.path().join("vcu.bin.patched.bin"));
        assert_eq!(edits.len(), 4);
        assert_eq!(prompter.remaining(), 0);

        let patched = fs::read(&path).unwrap();
        assert_eq!(patched.len(), 131072);
        for offset in SERIAL_AT {
            assert_eq!(&patched[offset..offset + 14], b"1CGA11112222AA");
        }
        assert_eq!(&patched[SENTINEL_AT..SENTINEL_AT + 14], b"1CGC0000000001");
        assert_eq!(read_u16_le(&patched, 0x1F0C4).unwrap(), 100);
        assert_eq!(read_u16_le(&patched, 0x1F4C4).unwrap(), 100);
        for offset in [0x1F08D, 0x1F091, 0x1F48D, 0x1F491] {
            assert_eq!(patched[offset], 25);
        }
        assert_eq!(&patched[0x1F5B4..0x1F5C0], key.as_slice());

        // Input is never modified
        assert_eq!(fs::read(&input).unwrap(), original);
        assert!(prompter.said("Current mileage A: 16 (1.6 km)"));
        assert!(prompter.said("Secret key transferred"));
    }

    #[test]
    fn test_declining_everything_saves_identical_copy() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let original = valid_dump(&profile);
        let input = write_dump(dir.path(), "vcu.bin", &original);
        let prompter = ScriptedPrompter::new(&["n", "n", "n", "n"]);

        let outcome = Session::new(&profile, &prompter).run(&input, false).unwrap();
        let SessionOutcome::Saved { path, edits } = outcome else {
            panic!("expected saved outcome");
        };
        assert!(edits.is_empty());
        assert_eq!(fs::read(path).unwrap(), original);
    }

    #[test]
    fn test_invalid_speed_aborts_before_save() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let input = write_dump(dir.path(), "vcu.bin", &valid_dump(&profile));
        let prompter = ScriptedPrompter::new(&["n", "n", "y", "126"]);

        let err = Session::new(&profile, &prompter).run(&input, false).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { field: "speed", .. }));
        assert!(!dir.path().join("vcu.bin.patched.bin").exists());
    }

    #[test]
    fn test_bad_header_fails_before_any_prompt() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let mut data = valid_dump(&profile);
        data[10] ^= 0xFF;
        let input = write_dump(dir.path(), "vcu.bin", &data);
        let prompter = ScriptedPrompter::new(&["y"]);

        let err = Session::new(&profile, &prompter).run(&input, false).unwrap_err();
        assert!(matches!(err, Error::HeaderMismatch { offset: 10 }));
        assert_eq!(prompter.remaining(), 1);
        assert!(prompter.said("Len correct: 131072"));
    }

    #[test]
    fn test_batch_plan() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let input = write_dump(dir.path(), "vcu.bin", &valid_dump(&profile));
        let prompter = ScriptedPrompter::new(&[]);
        let plan = PatchPlan {
            mileage: Some("4660".to_string()),
            speed: Some("42".to_string()),
            ..Default::default()
        };

        let outcome = Session::new(&profile, &prompter)
            .run_batch(&input, &plan)
            .unwrap();
        let SessionOutcome::Saved { path, edits } = outcome else {
            panic!("expected saved outcome");
        };
        assert!(matches!(edits[0], Edit::Mileage(_)));
        assert!(matches!(edits[1], Edit::Speed(_)));

        let patched = fs::read(path).unwrap();
        assert_eq!(read_u16_le(&patched, 0x1F4C4).unwrap(), 4660);
        assert_eq!(patched[0x1F491], 42);
        assert_eq!(&patched[SERIAL_AT[0]..SERIAL_AT[0] + 14], b"1CGX1234567890");
    }

    #[test]
    fn test_key_from_short_donor_warns_then_fails() {
        let dir = TempDir::new().unwrap();
        let profile = profile();
        let mut dump = Dump::from_bytes(valid_dump(&profile));
        let before = dump.clone();
        let donor = write_dump(dir.path(), "tiny.bin", &[0u8; 32]);
        let prompter = ScriptedPrompter::new(&[]);
        let plan = PatchPlan {
            key_source: Some(donor),
            ..Default::default()
        };

        let err = Session::new(&profile, &prompter)
            .apply_plan(&mut dump, &plan)
            .unwrap_err();
        assert!(matches!(err, Error::TooSmall { .. }));
        assert_eq!(dump, before);
        assert_eq!(prompter.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_template_session() {
        let templates = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let profile = FirmwareProfile::builtin(FirmwareVersion::V148).unwrap();
        let version = FirmwareVersion::V148;
        write_dump(templates.path(), version.template_file(), &valid_dump(&profile));
        let donor = write_dump(out.path(), "donor.bin", &valid_dump(&profile));
        let donor_arg = donor.to_string_lossy().into_owned();

        let prompter = ScriptedPrompter::new(&["1CGB22223333BB", "0", "99", &donor_arg]);
        let outcome = Session::new(&profile, &prompter)
            .run_template(version, templates.path(), out.path())
            .unwrap();

        let SessionOutcome::Saved { path, edits } = outcome else {
            panic!("expected saved outcome");
        };
        assert_eq!(
            path,
            out.path()
                .join("MEMORY_G3_1CGBC0000C0000_1.4.8_0.bin.patched.bin")
        );
        assert_eq!(edits.len(), 4);
        let patched = fs::read(path).unwrap();
        assert_eq!(read_u16_le(&patched, 0x1F0C4).unwrap(), 0);
        assert_eq!(patched[0x1F08D], 99);
    }

    #[test]
    fn test_template_session_with_legacy_name() {
        let templates = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let profile = FirmwareProfile::builtin(FirmwareVersion::V154).unwrap();
        let version = FirmwareVersion::V154;
        let legacy = version.legacy_template_file().unwrap();
        write_dump(templates.path(), legacy, &valid_dump(&profile));
        let donor = write_dump(out.path(), "donor.bin", &valid_dump(&profile));
        let donor_arg = donor.to_string_lossy().into_owned();

        assert_eq!(template_path(templates.path(), version), templates.path().join(legacy));

        let prompter = ScriptedPrompter::new(&["1CGB22223333BB", "10", "20", &donor_arg]);
        let outcome = Session::new(&profile, &prompter)
            .run_template(version, templates.path(), out.path())
            .unwrap();
        let SessionOutcome::Saved { path, .. } = outcome else {
            panic!("expected saved outcome");
        };
        assert_eq!(path, out.path().join(format!("{}.patched.bin", legacy)));
        assert_eq!(fs::read(path).unwrap()[0x1F48D], 20);
    }

    #[test]
    fn test_template_path_prefers_ascii_name() {
        let templates = TempDir::new().unwrap();
        let version = FirmwareVersion::V154;
        // Missing everywhere: the ASCII name is reported
        assert_eq!(
            template_path(templates.path(), version),
            templates.path().join(version.template_file())
        );

        write_dump(templates.path(), version.template_file(), b"x");
        write_dump(templates.path(), version.legacy_template_file().unwrap(), b"y");
        assert_eq!(
            template_path(templates.path(), version),
            templates.path().join(version.template_file())
        );
    }

    #[test]
    fn test_choose_input_uses_default_on_empty_answer() {
        let prompter = ScriptedPrompter::new(&["", " other.bin "]);
        let candidates = vec!["MEMORY_G3.bin".to_string()];

        assert_eq!(
            choose_input(&prompter, &candidates).unwrap(),
            PathBuf::from("MEMORY_G3.bin")
        );
        assert_eq!(
            choose_input(&prompter, &candidates).unwrap(),
            PathBuf::from("other.bin")
        );
    }

    #[test]
    fn test_choose_input_without_candidates() {
        let prompter = ScriptedPrompter::new(&["  "]);
        assert!(matches!(
            choose_input(&prompter, &[]),
            Err(Error::NoFileSelected)
        ));
    }

    #[test]
    fn test_choose_firmware() {
        let prompter = ScriptedPrompter::new(&["2", "1.5.5", "4", "abc"]);
        assert_eq!(choose_firmware(&prompter).unwrap(), FirmwareVersion::V154);
        assert_eq!(choose_firmware(&prompter).unwrap(), FirmwareVersion::V155);
        assert!(matches!(
            choose_firmware(&prompter),
            Err(Error::UnknownFirmware(v)) if v == "4"
        ));
        assert!(choose_firmware(&prompter).is_err());
        assert!(prompter.said("3) 1.5.5 (BETA)"));
    }
}
