#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use timetracker::models::TimeRecord;

/// Isolated file locations for one test: its own HOME, data file and session.
pub struct TestEnv {
    pub home: PathBuf,
    pub data: String,
    pub session: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("{}_timetracker_home", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");

        let data = home.join("data.json").to_string_lossy().to_string();
        let session = home.join("session.json").to_string_lossy().to_string();
        Self {
            home,
            data,
            session,
        }
    }

    /// `timetracker` with HOME/APPDATA and both data paths pointing at this env.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timetracker");
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env_remove("TIMETRACKER_LOG")
            .args(["--data", &self.data, "--session", &self.session]);
        cmd
    }

    /// Where the binary keeps `timetracker.conf` for this env's HOME/APPDATA.
    pub fn config_file(&self) -> PathBuf {
        let dir = if cfg!(target_os = "windows") {
            self.home.join("timetracker")
        } else {
            self.home.join(".timetracker")
        };
        dir.join("timetracker.conf")
    }

    /// `init` followed by a login as `username`.
    pub fn init_and_login(&self, username: &str) {
        self.cmd().arg("init").assert().success();
        self.cmd()
            .args(["login", username, "--password", "secret"])
            .assert()
            .success();
    }
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// Completed record with worked minutes and an optional client tag.
pub fn rec(id: &str, user: &str, date: NaiveDate, minutes: u32, client: Option<&str>) -> TimeRecord {
    TimeRecord {
        end_time: Some(t(17, 0)),
        total_work_time: Some(minutes),
        client_tag: client.map(str::to_string),
        ..TimeRecord::new(id, user, date, t(9, 0))
    }
}

pub fn late(mut r: TimeRecord) -> TimeRecord {
    r.used_entry_tolerance = true;
    r
}
