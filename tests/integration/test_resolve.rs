//! Integration tests for release-id resolution and decomposition

use anyhow::Result;
use bom_decomposer::{
  ArtifactCoords, DecomposerConfig, ReleaseId, ReleaseIdResolver, ReleaseOrigin, ReleaseVersion, StaticMetadataSource,
  decompose,
};
use std::sync::Arc;

const WEBSOCKET_API: &str = "jakarta.websocket:jakarta.websocket-api:2.1.0";

fn resolver(source: StaticMetadataSource) -> ReleaseIdResolver {
  ReleaseIdResolver::new(Arc::new(source))
}

#[test]
fn test_unmatched_artifacts_resolve_to_default() -> Result<()> {
  let resolver = resolver(
    StaticMetadataSource::new()
      .with_scm(
        "io.netty:netty-codec:4.1.100",
        "scm:git:https://github.com/netty/netty.git",
        Some("netty-4.1.100.Final"),
      )
      .with_scm("jakarta.servlet:jakarta.servlet-api:6.0.0", "https://github.com/eclipse-ee4j/servlet-api", None),
  );

  for coords in [
    "io.netty:netty-codec:4.1.100",
    "jakarta.servlet:jakarta.servlet-api:6.0.0",
    "org.slf4j:slf4j-api:2.0.9",
  ] {
    let coords: ArtifactCoords = coords.parse()?;
    assert_eq!(resolver.resolve(&coords)?, resolver.default_release_id(&coords)?);
  }

  Ok(())
}

#[test]
fn test_websocket_wrong_host_is_corrected() -> Result<()> {
  // Default origin points at the eclipse-ee4j umbrella organization
  let resolver = resolver(StaticMetadataSource::new().with_scm(
    WEBSOCKET_API,
    "scm:git:https://github.com/eclipse-ee4j/websocket-api.git",
    Some("2.1.0-RELEASE"),
  ));
  let coords: ArtifactCoords = WEBSOCKET_API.parse()?;

  assert!(resolver.default_release_id(&coords)?.origin_contains("eclipse-ee4j"));
  let id = resolver.resolve(&coords)?;
  assert_eq!(
    id,
    ReleaseId::new(
      ReleaseOrigin::scm("https://github.com/jakartaee/websocket"),
      ReleaseVersion::tag("2.1.0-RELEASE"),
    )
  );
  assert_eq!(id.to_string(), "https://github.com/jakartaee/websocket@2.1.0-RELEASE");

  Ok(())
}

#[test]
fn test_websocket_correct_host_passes_through() -> Result<()> {
  let resolver = resolver(StaticMetadataSource::new().with_scm(
    WEBSOCKET_API,
    "https://github.com/jakartaee/websocket",
    Some("2.1.0"),
  ));
  let coords: ArtifactCoords = WEBSOCKET_API.parse()?;

  assert_eq!(resolver.resolve(&coords)?, resolver.default_release_id(&coords)?);
  assert_eq!(
    resolver.resolve(&coords)?,
    ReleaseId::for_scm_and_tag("https://github.com/jakartaee/websocket", "2.1.0")
  );

  Ok(())
}

#[test]
fn test_configured_relocation_groups_artifacts() -> Result<()> {
  let config = DecomposerConfig::from_toml_str(
    r#"
[resolution]
parallel = true

[[relocations]]
group = "org.acme"
marker = "umbrella"
scm = "https://github.com/acme/acme"
tag_suffix = ".Final"
"#,
  )?;

  let source = StaticMetadataSource::new()
    .with_scm("org.acme:acme-core:3.0", "https://git.umbrella.org/everything.git", None)
    .with_scm("org.acme:acme-web:3.0", "https://git.umbrella.org/everything.git", None)
    .with_scm(WEBSOCKET_API, "https://github.com/eclipse-ee4j/websocket-api", None);
  let resolver = ReleaseIdResolver::from_config(Arc::new(source), &config);

  let artifacts: Vec<ArtifactCoords> = [
    "org.acme:acme-core:3.0",
    WEBSOCKET_API,
    "org.acme:acme-web:3.0",
    "org.slf4j:slf4j-api:2.0.9",
  ]
  .iter()
  .map(|s| s.parse())
  .collect::<Result<_, _>>()?;

  let decomposition = decompose(&resolver, &artifacts, config.resolution.parallel)?;
  let ids: Vec<String> = decomposition.releases().iter().map(|r| r.id().to_string()).collect();
  assert_eq!(
    ids,
    vec![
      "https://github.com/acme/acme@3.0.Final",
      "https://github.com/jakartaee/websocket@2.1.0-RELEASE",
      "org.slf4j:slf4j-api@2.0.9",
    ]
  );
  assert_eq!(decomposition.releases()[0].len(), 2);

  Ok(())
}
