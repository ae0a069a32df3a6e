use crate::{config::SiteConfig, page::render_index};
use folio_deps::anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct ExportOptions {
	pub out_dir: PathBuf,
	/// A directory of `.html` fragments, one per section.
	pub fragments_dir: Option<PathBuf>,
	/// The `wasm-bindgen --target web` output for the client crate. It is copied to `pkg/`.
	pub client_dir: Option<PathBuf>,
}

/// Write the static site to `out_dir`.
pub fn export(config: &SiteConfig, options: &ExportOptions) -> Result<()> {
	let out_dir = &options.out_dir;
	std::fs::create_dir_all(out_dir)
		.with_context(|| format!("failed to create {}", out_dir.display()))?;
	let index_path = out_dir.join("index.html");
	std::fs::write(&index_path, render_index(config)?)
		.with_context(|| format!("failed to write {}", index_path.display()))?;
	tracing::info!(path = %index_path.display(), "wrote page");
	if let Some(fragments_dir) = &options.fragments_dir {
		let count = copy_fragments(fragments_dir, out_dir)?;
		tracing::info!(count, from = %fragments_dir.display(), "copied fragments");
	}
	if let Some(client_dir) = &options.client_dir {
		copy_dir(client_dir, &out_dir.join("pkg"))?;
		tracing::info!(from = %client_dir.display(), "copied client");
	}
	for section in &config.props.nav.sections {
		if !out_dir.join(&section.file).exists() {
			tracing::warn!(section = %section.id, file = %section.file, "missing fragment");
		}
	}
	Ok(())
}

fn copy_fragments(fragments_dir: &Path, out_dir: &Path) -> Result<usize> {
	let mut count = 0;
	let entries = std::fs::read_dir(fragments_dir)
		.with_context(|| format!("failed to read {}", fragments_dir.display()))?;
	for entry in entries {
		let path = entry?.path();
		let is_fragment = path.is_file()
			&& path.extension().and_then(|extension| extension.to_str()) == Some("html");
		if !is_fragment {
			continue;
		}
		if let Some(file_name) = path.file_name() {
			std::fs::copy(&path, out_dir.join(file_name))
				.with_context(|| format!("failed to copy {}", path.display()))?;
			count += 1;
		}
	}
	Ok(count)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
	std::fs::create_dir_all(dst).with_context(|| format!("failed to create {}", dst.display()))?;
	for entry in std::fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))? {
		let entry = entry?;
		let path = entry.path();
		let dst_path = dst.join(entry.file_name());
		if path.is_dir() {
			copy_dir(&path, &dst_path)?;
		} else {
			std::fs::copy(&path, &dst_path)
				.with_context(|| format!("failed to copy {}", path.display()))?;
		}
	}
	Ok(())
}

#[test]
fn test_export() {
	let fragments = tempfile::tempdir().unwrap();
	std::fs::write(fragments.path().join("aboutme.html"), "<p>Hi</p>").unwrap();
	std::fs::write(fragments.path().join("notes.txt"), "skip me").unwrap();
	let client = tempfile::tempdir().unwrap();
	std::fs::create_dir(client.path().join("snippets")).unwrap();
	std::fs::write(client.path().join("folio_client.js"), "export default function init() {}").unwrap();
	std::fs::write(client.path().join("snippets").join("a.js"), "").unwrap();
	let out = tempfile::tempdir().unwrap();
	let options = ExportOptions {
		out_dir: out.path().join("build"),
		fragments_dir: Some(fragments.path().to_owned()),
		client_dir: Some(client.path().to_owned()),
	};
	export(&SiteConfig::default(), &options).unwrap();
	let build = out.path().join("build");
	assert!(std::fs::read_to_string(build.join("index.html"))
		.unwrap()
		.contains(r#"id="folio-page""#));
	assert_eq!(
		std::fs::read_to_string(build.join("aboutme.html")).unwrap(),
		"<p>Hi</p>"
	);
	assert!(!build.join("notes.txt").exists());
	assert!(build.join("pkg").join("folio_client.js").exists());
	assert!(build.join("pkg").join("snippets").join("a.js").exists());
}

#[test]
fn test_export_missing_fragments_dir() {
	let out = tempfile::tempdir().unwrap();
	let options = ExportOptions {
		out_dir: out.path().to_owned(),
		fragments_dir: Some(out.path().join("nope")),
		client_dir: None,
	};
	assert!(export(&SiteConfig::default(), &options).is_err());
}
