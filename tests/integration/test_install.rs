//! Integration tests for materializing releases into a repository

use crate::helpers::TestRepository;
use anyhow::Result;
use bom_decomposer::install::Packaging;
use bom_decomposer::{
  ArtifactCoords, DecomposeError, ReleaseId, ReleaseInstaller, ReleaseOrigin, ReleaseVersion, ValidationError,
};

#[test]
fn test_release_under_parent_aggregator() -> Result<()> {
  let repo = TestRepository::new()?;

  let release = ReleaseInstaller::for_ga("g", "a1")
    .tag("1.0")
    .parent_name("g-parent")?
    .artifact("g:a1:1.0:jar")?
    .artifact("g:a2:1.0:jar")?
    .repository(repo.repo())
    .install()?;

  assert_eq!(
    release.id(),
    &ReleaseId::new(ReleaseOrigin::ga("g", "a1"), ReleaseVersion::tag("1.0"))
  );
  assert_eq!(release.len(), 2);

  // Exactly the parent plus one manifest per module
  assert_eq!(repo.manifests()?.len(), 3);

  let parent = repo.manifest("g:g-parent:1.0:pom")?;
  assert_eq!(parent.project.packaging, Packaging::Aggregator);
  assert_eq!(parent.modules(), ["a1", "a2"]);
  assert!(parent.parent.is_none());
  assert!(parent.scm.is_none());

  for module in ["g:a1:1.0", "g:a2:1.0"] {
    let manifest = repo.manifest(module)?;
    assert_eq!(manifest.project.packaging, Packaging::Normal);
    assert_eq!(manifest.parent.as_ref(), Some(&parent.as_parent_ref()));
    assert!(manifest.scm.is_none(), "GA releases carry no scm section");
  }

  assert!(repo.path.join("g/a1/1.0/a1-1.0.jar").is_file());
  assert!(repo.path.join("g/a2/1.0/a2-1.0.jar").is_file());
  assert!(!repo.path.join("g/g-parent/1.0/g-parent-1.0.pom").exists());

  Ok(())
}

#[test]
fn test_for_parent_shorthand() -> Result<()> {
  let repo = TestRepository::new()?;

  ReleaseInstaller::for_parent("org.acme:acme-parent:2.0")?
    .artifact_name("acme-core")?
    .artifact_name("acme-web")?
    .artifact_name("acme-core")?
    .repository(repo.repo())
    .install()?;

  let parent = repo.manifest("org.acme:acme-parent:2.0:pom")?;
  assert_eq!(parent.modules(), ["acme-core", "acme-web"]);

  let core = repo.manifest("org.acme:acme-core:2.0")?;
  let parent_ref = core.parent.expect("module should reference its parent");
  assert_eq!(parent_ref.name, "acme-parent");
  assert_eq!(parent_ref.version, "2.0");

  Ok(())
}

#[test]
fn test_reinstall_is_byte_identical() -> Result<()> {
  let repo = TestRepository::new()?;
  let installer = ReleaseInstaller::for_scm_and_tag("https://github.com/acme/acme", "v1.0")
    .project_group("org.acme")
    .parent_name("acme-parent")?
    .artifact("org.acme:acme-core:v1.0")?
    .artifact("org.acme:acme-core:v1.0:sources:jar")?
    .artifact("org.acme:acme-bom:v1.0:pom")?
    .repository(repo.repo());

  let first = installer.clone().install()?;
  let before = repo.snapshot()?;
  let second = installer.install()?;
  let after = repo.snapshot()?;

  assert_eq!(first, second);
  assert!(!before.is_empty());
  assert_eq!(before, after);

  Ok(())
}

#[test]
fn test_failed_install_keeps_earlier_files() -> Result<()> {
  let repo = TestRepository::new()?;
  // Block the second module's group directory with a regular file
  std::fs::create_dir_all(&repo.path)?;
  std::fs::write(repo.path.join("zz"), "not a directory")?;

  let err = ReleaseInstaller::for_scm_and_tag("https://github.com/acme/acme", "v1.0")
    .artifact("org.acme:acme-core:1.0")?
    .artifact("zz:blocked:1.0")?
    .repository(repo.repo())
    .install()
    .unwrap_err();

  match err {
    DecomposeError::Installation { artifact, path, .. } => {
      assert_eq!(artifact.to_string(), "zz:blocked:1.0:jar");
      assert!(path.starts_with(repo.path.join("zz")));
    }
    other => panic!("unexpected error: {}", other),
  }

  assert!(repo.path.join("org/acme/acme-core/1.0/acme-core-1.0.jar").is_file());
  assert_eq!(repo.manifests()?.len(), 1);

  Ok(())
}

#[test]
fn test_manifest_failure_reports_dependency_coords() -> Result<()> {
  let repo = TestRepository::new()?;
  // Only the manifest path is taken; the content file can still be written
  let manifest_path = repo.path.join("g/a1/1.0/a1-1.0.manifest.toml");
  std::fs::create_dir_all(&manifest_path)?;

  let err = ReleaseInstaller::for_ga("g", "a1")
    .tag("1.0")
    .artifact("g:a1:1.0:jar")?
    .repository(repo.repo())
    .install()
    .unwrap_err();

  match err {
    DecomposeError::Installation { artifact, path, .. } => {
      assert_eq!(artifact.to_string(), "g:a1:1.0:jar");
      assert_eq!(path, manifest_path);
    }
    other => panic!("unexpected error: {}", other),
  }
  assert!(repo.path.join("g/a1/1.0/a1-1.0.jar").is_file());

  Ok(())
}

#[test]
fn test_escaping_coords_are_refused() -> Result<()> {
  let repo = TestRepository::new()?;
  let outside = repo.path.parent().map(|p| p.join("escaped"));

  let err = ReleaseInstaller::for_ga("g", "a")
    .tag("1.0")
    .artifact("g:a:../../../escaped")
    .unwrap_err();
  assert!(matches!(err, DecomposeError::Validation(ValidationError::InvalidCoords { .. })));

  // Constructed coordinates skip the parser but not the repository
  let constructed = ArtifactCoords::new("g", "a", None::<String>, "jar", "../../../escaped");
  let err = ReleaseInstaller::for_ga("g", "a")
    .tag("1.0")
    .artifact_coords(constructed)?
    .repository(repo.repo())
    .install()
    .unwrap_err();
  assert!(matches!(err, DecomposeError::Validation(ValidationError::InvalidCoords { .. })));

  assert!(repo.files()?.is_empty());
  assert!(!outside.is_some_and(|p| p.exists()));

  Ok(())
}
