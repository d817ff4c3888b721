use crate::domain::models::ContextDocument;
use anyhow::Context;
use log::{debug, info};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;

/// Serializes the document as indented XML: a `<documents>` root holding one
/// `<document index="N">` element per record, each with a `<source>` and a
/// `<document_content>` child. Text is escaped only as far as XML
/// well-formedness requires.
pub fn serialize_document(document: &ContextDocument) -> anyhow::Result<String> {
    debug!("Serializing {} records", document.records.len());
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("documents")))?;

    for record in &document.records {
        let index = record.index.to_string();
        let mut doc = BytesStart::new("document");
        doc.push_attribute(("index", index.as_str()));
        writer.write_event(Event::Start(doc))?;

        writer.write_event(Event::Start(BytesStart::new("source")))?;
        writer.write_event(Event::Text(BytesText::new(&record.source)))?;
        writer.write_event(Event::End(BytesEnd::new("source")))?;

        writer.write_event(Event::Start(BytesStart::new("document_content")))?;
        writer.write_event(Event::Text(BytesText::new(&record.content)))?;
        writer.write_event(Event::End(BytesEnd::new("document_content")))?;

        writer.write_event(Event::End(BytesEnd::new("document")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("documents")))?;

    String::from_utf8(writer.into_inner()).context("serialized document is not valid UTF-8")
}

/// Overwrites `path` with the serialized document. Any I/O failure here is
/// fatal to the run.
pub fn write_output(content: &str, path: &Path) -> anyhow::Result<()> {
    fs::write(path, content)
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    info!("Output written to {}", path.display());
    Ok(())
}
