// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

const PROXY: &str = env!("CARGO_BIN_EXE_amunchain-txfilter");

fn write_config(dir: &tempfile::TempDir, targets: &str) -> std::path::PathBuf {
    let path = dir.path().join("node.toml");
    fs::write(&path, format!("[tx-filter]\nallowed-targets = {targets}\n")).expect("write");
    path
}

#[test]
fn refuses_to_start_on_invalid_target() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = write_config(&dir, r#"["wrong.prefix.non-standard.namespace.test", "cosmos.bank"]"#);

    let out = Command::new(PROXY)
        .env("TXFILTER_CONFIG", &cfg)
        .env("RUST_LOG", "error")
        .stdin(Stdio::null())
        .output()
        .expect("run proxy");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn admits_stdin_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = write_config(&dir, r#"["cosmos.bank"]"#);

    let mut child = Command::new(PROXY)
        .env("TXFILTER_CONFIG", &cfg)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn proxy");

    {
        let mut stdin = child.stdin.take().expect("stdin");
        stdin
            .write_all(
                concat!(
                    r#"{"mode":"check","height":3,"msgs":[{"type_url":"/cosmos.bank.v1beta1.MsgSend"}]}"#,
                    "\n\n",
                    r#"{"mode":"check","height":3,"msgs":[{"type_url":"/x.y.z"}]}"#,
                    "\n",
                )
                .as_bytes(),
            )
            .expect("write stdin");
    }

    let out = child.wait_with_output().expect("wait proxy");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"line":1,"accepted":true}"#,
            r#"{"line":3,"accepted":false,"error":"/x.y.z is not allowed on proxy node"}"#,
        ]
    );
}
