//! Properties sources pass through YAML resolution and come back as
//! `key=value` lines.

use anyhow::{Result, ensure};
use rstest::rstest;
use sccc_config::properties::{from_yaml, to_yaml};
use sccc_config::{SectionList, SourceFormat, compose, resolve_document};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[rstest]
fn sectioned_properties_resolve_to_flat_entries() -> Result<()> {
    let source = concat!(
        "default:\n",
        "  port=8080\n",
        "  host=localhost\n",
        "namespace:\n",
        "  dev:\n",
        "    port=9090\n",
    );
    let rendered = resolve_document(
        to_yaml(source).as_bytes(),
        &SectionList::standard("dev", ""),
    )?;
    let output = from_yaml(&rendered);
    ensure!(
        lines(&output) == ["port=9090", "host=localhost"],
        "unexpected properties output:\n{output}"
    );
    Ok(())
}

#[rstest]
fn empty_values_stay_empty() -> Result<()> {
    let source = "default:\n  token=\n  name=svc\n";
    let rendered = resolve_document(
        to_yaml(source).as_bytes(),
        &SectionList::standard("default", ""),
    )?;
    let output = from_yaml(&rendered);
    ensure!(
        lines(&output).contains(&"token="),
        "empty value was not collapsed:\n{output}"
    );
    ensure!(lines(&output).contains(&"name=svc"), "lost entry:\n{output}");
    Ok(())
}

#[rstest]
fn templated_properties_use_base_as_default() -> Result<()> {
    let composed = compose(
        SourceFormat::Properties,
        b"port=8080\nhost=localhost\n",
        Some(b"version:\n  1.2.0:\n    port=7070\n".as_slice()),
    )?;
    let rendered = resolve_document(
        to_yaml(&composed).as_bytes(),
        &SectionList::standard("default", "1.2.0"),
    )?;
    let output = from_yaml(&rendered);
    ensure!(
        lines(&output) == ["port=7070", "host=localhost"],
        "unexpected properties output:\n{output}"
    );
    Ok(())
}
