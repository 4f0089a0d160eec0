//! Minimal incremental PDF writer.
//!
//! Objects are buffered, then serialized in one pass with a hand-built xref
//! table and trailer. Object ids are handed out contiguously from 1, so the
//! xref is always a single section.

use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

pub struct PdfWriter<W: Write + Seek> {
    writer: W,
    offsets: BTreeMap<u32, u64>,
    max_id: u32,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> PdfWriter<W> {
    pub fn new(mut writer: W, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all("%PDF-1.7\n%âãÏÓ\n".as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            offsets: BTreeMap::new(),
            max_id: 2,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_content_stream(&mut self, content: &Content) -> ObjectId {
        let stream = Stream::new(dictionary! {}, content.encode().unwrap_or_default());
        self.buffer_object(Object::Stream(stream))
    }

    /// Registers a page object pointing at an already-buffered content
    /// stream. Pages appear in the document in registration order.
    pub fn add_page(&mut self, width_pt: f32, height_pt: f32, content_id: ObjectId) {
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width_pt.into(), height_pt.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let id = self.buffer_object(page_dict.into());
        self.page_ids.push(id);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());

        let catalog_id = self.new_object_id();
        let catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(catalog_id, catalog.into());

        let objects = std::mem::take(&mut self.buffered_objects);
        for (id, object) in &objects {
            let offset = self.writer.stream_position()?;
            self.offsets.insert(id.0, offset);
            writeln!(self.writer, "{} {} obj", id.0, id.1)?;
            write_object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {size}")?;
        writeln!(self.writer, "0000000000 65535 f ")?;
        for id in 1..size {
            let offset = self.offsets.get(&id).copied().unwrap_or(0);
            writeln!(self.writer, "{offset:010} 00000 n ")?;
        }

        let trailer = dictionary! { "Size" => size as i64, "Root" => catalog_id };
        writeln!(self.writer, "trailer")?;
        write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{xref_start}")?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
    match object {
        Object::Null => writer.write_all(b"null"),
        Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
        Object::Integer(i) => write!(writer, "{i}"),
        Object::Real(r) => write!(writer, "{r:.3}"),
        Object::Name(n) => {
            writer.write_all(b"/")?;
            writer.write_all(n)
        }
        Object::String(s, format) => match format {
            StringFormat::Literal => {
                writer.write_all(b"(")?;
                for &byte in s {
                    if byte == b'(' || byte == b')' || byte == b'\\' {
                        writer.write_all(b"\\")?;
                    }
                    writer.write_all(&[byte])?;
                }
                writer.write_all(b")")
            }
            StringFormat::Hexadecimal => {
                write!(
                    writer,
                    "<{}>",
                    s.iter().map(|b| format!("{b:02X}")).collect::<String>()
                )
            }
        },
        Object::Array(arr) => {
            writer.write_all(b"[")?;
            for (i, obj) in arr.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b" ")?;
                }
                write_object(writer, obj)?;
            }
            writer.write_all(b"]")
        }
        Object::Dictionary(dict) => write_dictionary(writer, dict),
        Object::Stream(stream) => {
            let mut dict = stream.dict.clone();
            dict.set("Length", stream.content.len() as i64);
            write_dictionary(writer, &dict)?;
            writer.write_all(b"\nstream\n")?;
            writer.write_all(&stream.content)?;
            writer.write_all(b"\nendstream")
        }
        Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
    }
}

fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
    writer.write_all(b"<<")?;
    let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
    for (key, value) in sorted_keys {
        writer.write_all(b"/")?;
        writer.write_all(key)?;
        writer.write_all(b" ")?;
        write_object(writer, value)?;
        writer.write_all(b" ")?;
    }
    writer.write_all(b">>")
}
