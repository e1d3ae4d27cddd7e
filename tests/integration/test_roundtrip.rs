//! Installed fixtures read back and re-resolved

use crate::helpers::TestRepository;
use anyhow::Result;
use bom_decomposer::{
  ArtifactCoords, ArtifactManifest, DecomposeError, ReleaseIdResolver, ReleaseInstaller, ReleaseOrigin,
  RepositoryMetadataSource, decompose,
};
use std::sync::Arc;

#[test]
fn test_manifests_reproduce_release_fields() -> Result<()> {
  let repo = TestRepository::new()?;
  let release = ReleaseInstaller::for_scm_and_tag("https://github.com/acme/acme", "v3.2")
    .project_group("org.acme")
    .parent_name("acme-parent")?
    .artifact_name("acme-core")?
    .artifact_name("acme-web")?
    .repository(repo.repo())
    .install()?;

  let parent = repo.manifest("org.acme:acme-parent:v3.2:pom")?;
  let ReleaseOrigin::ScmConnection { url } = release.id().origin() else {
    panic!("expected an scm origin");
  };

  for dependency in release.dependencies() {
    let artifact = dependency.artifact();
    let manifest = ArtifactManifest::read(&repo.repo(), artifact)?;

    assert_eq!(manifest.project.group, artifact.group);
    assert_eq!(manifest.project.name, artifact.name);
    assert_eq!(manifest.project.version, artifact.version);
    assert_eq!(manifest.parent, Some(parent.as_parent_ref()));

    let scm = manifest.scm.expect("scm release should record scm metadata");
    assert_eq!(&scm.connection, url);
    assert_eq!(scm.tag, release.id().version().as_str());
  }

  Ok(())
}

#[test]
fn test_manifest_does_not_record_classifier_or_type() -> Result<()> {
  let repo = TestRepository::new()?;
  ReleaseInstaller::for_scm_and_tag("https://github.com/acme/acme", "v1.0")
    .artifact("org.acme:acme-core:1.0")?
    .artifact("org.acme:acme-core:1.0:sources:jar")?
    .repository(repo.repo())
    .install()?;

  let jar: ArtifactCoords = "org.acme:acme-core:1.0".parse()?;
  let sources: ArtifactCoords = "org.acme:acme-core:1.0:sources:jar".parse()?;

  // Both coordinates share one group:name:version manifest
  let manifest = ArtifactManifest::read(&repo.repo(), &sources)?;
  assert_eq!(manifest, ArtifactManifest::read(&repo.repo(), &jar)?);
  assert_eq!(repo.manifests()?.len(), 1);

  // Rebuilding coordinates from the manifest yields the plain jar, never the classified one
  let rebuilt = ArtifactCoords::jar(&manifest.project.group, &manifest.project.name, &manifest.project.version);
  assert_eq!(rebuilt, jar);
  assert_ne!(rebuilt, sources);

  Ok(())
}

#[test]
fn test_installed_release_resolves_to_its_id() -> Result<()> {
  let repo = TestRepository::new()?;
  let release = ReleaseInstaller::for_scm_and_tag("https://github.com/acme/acme", "v1.0")
    .artifact("org.acme:acme-core:1.0")?
    .artifact("org.acme:acme-web:1.0")?
    .artifact("org.acme:acme-core:1.0:sources:jar")?
    .repository(repo.repo())
    .install()?;

  let resolver = ReleaseIdResolver::new(Arc::new(RepositoryMetadataSource::new(repo.repo())));
  let artifacts: Vec<_> = release.artifacts().cloned().collect();

  let decomposition = decompose(&resolver, &artifacts, true)?;
  assert_eq!(decomposition.releases().len(), 1);
  assert_eq!(decomposition.releases()[0], release);

  Ok(())
}

#[test]
fn test_uninstalled_artifact_fails_resolution() -> Result<()> {
  let repo = TestRepository::new()?;
  let resolver = ReleaseIdResolver::new(Arc::new(RepositoryMetadataSource::new(repo.repo())));

  let missing: ArtifactCoords = "org.acme:missing:1.0".parse()?;
  let err = resolver.resolve(&missing).unwrap_err();
  assert!(matches!(err, DecomposeError::Resolution { .. }));

  Ok(())
}

#[test]
fn test_websocket_fixture_is_redirected() -> Result<()> {
  let repo = TestRepository::new()?;
  ReleaseInstaller::for_scm_and_tag("scm:git:git@github.com:eclipse-ee4j/websocket-api.git", "2.1.0")
    .artifact("jakarta.websocket:jakarta.websocket-api:2.1.0")?
    .artifact("jakarta.websocket:jakarta.websocket-client-api:2.1.0")?
    .repository(repo.repo())
    .install()?;

  let resolver = ReleaseIdResolver::new(Arc::new(RepositoryMetadataSource::new(repo.repo())));
  let api: ArtifactCoords = "jakarta.websocket:jakarta.websocket-api:2.1.0".parse()?;

  assert!(resolver.default_release_id(&api)?.origin_contains("eclipse-ee4j"));
  assert_eq!(
    resolver.resolve(&api)?.to_string(),
    "https://github.com/jakartaee/websocket@2.1.0-RELEASE"
  );

  Ok(())
}
