// crates/objdictgen/src/builder/entry.rs

//! Emits the per-index content: variables, callback placeholders and the
//! subindex descriptor table of every entry from 0x1000 upwards.

use super::Emission;
use super::utils::{ascii_name, c_identifier, format_name, undigit_name};
use super::value_range::EMC_RANGE;
use crate::error::GenError;
use crate::log::{GenContext, gen_trace};
use crate::resolver::TypeResolver;
use crate::types::{PointerAliases, ResolvedType, SemanticKind};
use crate::value::format_value;
use objdict::od::constants::{
    IDX_COMM_AREA_START, IDX_PREDEFINED_ERROR_FIELD_AU32, IDX_USER_AREA_END, IDX_USER_AREA_START,
};
use objdict::{Object, ObjectDictionary, ObjectEntry, ObjectValue, StructFlags, SubEntry};
use std::borrow::Cow;
use std::fmt::Write;

/// Code shape an entry is lowered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single value.
    Scalar,
    /// Subindexes 1..N share one type and become one C array.
    Record,
    /// Every subindex has its own type and its own variable.
    Array,
}

impl Shape {
    pub fn of(entry: &ObjectEntry) -> Self {
        match entry.object {
            Object::Variable(_) => Shape::Scalar,
            Object::Sequence(_) if entry.structure.contains(StructFlags::IDENTICAL_SUBINDEXES) => {
                Shape::Record
            }
            Object::Sequence(_) => Shape::Array,
        }
    }
}

/// Returns true for indexes exposed as top-level mapped variables.
pub fn is_mapped(index: u16) -> bool {
    (IDX_USER_AREA_START..=IDX_USER_AREA_END).contains(&index)
}

/// Emits every dictionary entry at or above 0x1000 into `emission`.
pub(crate) fn build_entries(
    od: &ObjectDictionary,
    resolver: &mut TypeResolver,
    aliases: &PointerAliases,
    emission: &mut Emission,
) -> Result<(), GenError> {
    let ctx = GenContext::new(od.node_name(), "entries");
    for index in od.indexes_in(IDX_COMM_AREA_START, u16::MAX) {
        let entry = od.entry(index).ok_or(GenError::MissingEntry {
            index,
            sub_index: None,
        })?;
        let shape = Shape::of(entry);
        gen_trace!(
            ctx,
            "Index 0x{:04X} '{}' emitted as {:?}{}",
            index,
            entry.name,
            shape,
            if is_mapped(index) { " (mapped)" } else { "" }
        );

        let mut writer = EntryWriter {
            od,
            resolver: &mut *resolver,
            aliases,
            emission: &mut *emission,
            node: od.node_name(),
            index,
            entry,
            mapped: is_mapped(index),
            content: String::new(),
        };
        writer.write()?;
        let content = writer.content;
        emission.index_contents.insert(index, content);
    }
    Ok(())
}

struct EntryWriter<'a, 'r> {
    od: &'a ObjectDictionary,
    resolver: &'r mut TypeResolver,
    aliases: &'a PointerAliases,
    emission: &'r mut Emission,
    node: &'a str,
    index: u16,
    entry: &'a ObjectEntry,
    mapped: bool,
    content: String,
}

impl<'a> EntryWriter<'a, '_> {
    fn write(&mut self) -> Result<(), GenError> {
        let values = self.values()?;
        let title = ascii_name(&self.entry.name);
        if self.mapped {
            write!(
                self.content,
                "\n/* index 0x{:04X} :   Mapped variable {} */\n",
                self.index, title
            )?;
        } else {
            write!(
                self.content,
                "\n/* index 0x{:04X} :   {}. */\n",
                self.index, title
            )?;
        }

        match Shape::of(self.entry) {
            Shape::Scalar => self.write_scalar(&values[0])?,
            Shape::Record => {
                self.write_count(values)?;
                self.write_record(values)?;
            }
            Shape::Array => {
                self.write_count(values)?;
                self.write_array(values)?;
            }
        }

        self.write_callbacks(values.len())?;
        self.write_subindex_table(values)
    }

    fn values(&self) -> Result<&'a [ObjectValue], GenError> {
        let entry: &'a ObjectEntry = self.entry;
        let values: &'a [ObjectValue] = match &entry.object {
            Object::Variable(value) => std::slice::from_ref(value),
            Object::Sequence(values) => values.as_slice(),
        };
        if values.is_empty() {
            return Err(GenError::MissingEntry {
                index: self.index,
                sub_index: Some(0),
            });
        }
        if values.len() > usize::from(u8::MAX) + 1 {
            return Err(GenError::InvalidValue {
                index: self.index,
                sub_index: u8::MAX,
                kind: "subindex count".to_string(),
            });
        }
        Ok(values)
    }

    fn sub_entry(&self, sub_index: u8) -> Result<&'a SubEntry, GenError> {
        let entry: &'a ObjectEntry = self.entry;
        entry
            .sub_entry(sub_index)
            .ok_or(GenError::MissingEntry {
                index: self.index,
                sub_index: Some(sub_index),
            })
    }

    fn type_name(&self, sub: &SubEntry) -> Result<Cow<'a, str>, GenError> {
        let od: &'a ObjectDictionary = self.od;
        od.type_name(sub.data_type)
            .ok_or(GenError::MissingTypeDefinition {
                type_code: sub.data_type,
            })
    }

    fn resolve_sub<'v>(
        &mut self,
        sub: &SubEntry,
        candidates: impl IntoIterator<Item = &'v ObjectValue>,
    ) -> Result<ResolvedType, GenError> {
        let type_name = self.type_name(sub)?;
        self.resolver.resolve_for(&type_name, candidates)
    }

    fn write_scalar(&mut self, value: &ObjectValue) -> Result<(), GenError> {
        let sub = self.sub_entry(0)?;
        let resolved = self.resolve_sub(sub, [value])?;
        if self.mapped && resolved.kind == SemanticKind::Domain && resolved.size == Some(0) {
            return Err(GenError::UninitializedDomain {
                index: self.index,
                sub_index: 0,
            });
        }
        let suffix = resolved.array_suffix();
        let literal = format_value(resolved.kind, value, self.index, 0)?;

        if self.mapped {
            let name = c_identifier(&sub.name);
            write!(
                self.emission.header_declarations,
                "extern {} {}{};\t\t/* Mapped at index 0x{:04X}, subindex 0x00*/\n",
                resolved.storage, name, suffix, self.index
            )?;
            write!(
                self.emission.mapped_variables,
                "{} {}{} = {};\t\t/* Mapped at index 0x{:04X}, subindex 0x00 */\n",
                resolved.storage, name, suffix, literal.text, self.index
            )?;
            self.emission.mapped_count += 1;
        } else {
            write!(
                self.content,
                "                    {} {}_obj{:04X}{} = {};{}\n",
                resolved.storage, self.node, self.index, suffix, literal.text, literal.comment
            )?;
        }
        Ok(())
    }

    /// Subindex 0 of a sequence: the number of the following subindexes.
    fn write_count(&mut self, values: &[ObjectValue]) -> Result<(), GenError> {
        let sub = self.sub_entry(0)?;
        let type_name = self.type_name(sub)?;
        let resolved = self.resolver.resolve(&type_name)?;
        let count = if self.index == IDX_PREDEFINED_ERROR_FIELD_AU32 {
            0
        } else {
            self.count_value(values)?
        };
        write!(
            self.content,
            "                    {} {}_highestSubIndex_obj{:04X} = {}; /* number of subindex - 1*/\n",
            resolved.storage, self.node, self.index, count
        )?;
        Ok(())
    }

    fn count_value(&self, values: &[ObjectValue]) -> Result<u64, GenError> {
        values[0].as_u64().ok_or_else(|| GenError::InvalidValue {
            index: self.index,
            sub_index: 0,
            kind: "subindex count".to_string(),
        })
    }

    fn write_record(&mut self, values: &[ObjectValue]) -> Result<(), GenError> {
        let sub = self.sub_entry(1)?;
        let resolved = self.resolve_sub(sub, &values[1..])?;
        let pointer_suffix = if resolved.size.is_some() { "*" } else { "" };
        let length = self.count_value(values)?;
        let last = values.len() - 1;

        if self.mapped {
            let name = c_identifier(&self.entry.name);
            write!(
                self.emission.header_declarations,
                "extern {}{} {}[{}];\t\t/* Mapped at index 0x{:04X}, subindex 0x01 - 0x{:02X} */\n",
                resolved.storage, pointer_suffix, name, last, self.index, length
            )?;
            let out = &mut self.emission.mapped_variables;
            write!(
                out,
                "{}{} {}[] =\t\t/* Mapped at index 0x{:04X}, subindex 0x01 - 0x{:02X} */\n  {{\n",
                resolved.storage, pointer_suffix, name, self.index, length
            )?;
            for (position, value) in values.iter().enumerate().skip(1) {
                let sub_index = position as u8;
                let literal = format_value(resolved.kind, value, self.index, sub_index)?;
                if resolved.kind == SemanticKind::Domain && literal.text == "\"\"" {
                    return Err(GenError::UninitializedDomain {
                        index: self.index,
                        sub_index,
                    });
                }
                let sep = if position == last { "" } else { "," };
                writeln!(out, "    {}{}{}", literal.text, sep, literal.comment)?;
            }
            out.push_str("  };\n");
            self.emission.mapped_count += 1;
        } else {
            write!(
                self.content,
                "                    {}{} {}_obj{:04X}[] = \n                    {{\n",
                resolved.storage, pointer_suffix, self.node, self.index
            )?;
            for (position, value) in values.iter().enumerate().skip(1) {
                let literal = format_value(resolved.kind, value, self.index, position as u8)?;
                let sep = if position == last { "" } else { "," };
                writeln!(
                    self.content,
                    "                      {}{}{}",
                    literal.text, sep, literal.comment
                )?;
            }
            self.content.push_str("                    };\n");
        }
        Ok(())
    }

    fn write_array(&mut self, values: &[ObjectValue]) -> Result<(), GenError> {
        let parent = c_identifier(&self.entry.name);
        for (position, value) in values.iter().enumerate().skip(1) {
            let sub_index = position as u8;
            let sub = self.sub_entry(sub_index)?;
            let resolved = self.resolve_sub(sub, [value])?;
            let suffix = resolved.array_suffix();
            let literal = format_value(resolved.kind, value, self.index, sub_index)?;
            let name = format_name(&sub.name);

            if self.mapped {
                if resolved.kind == SemanticKind::Domain && resolved.size == Some(0) {
                    return Err(GenError::UninitializedDomain {
                        index: self.index,
                        sub_index,
                    });
                }
                write!(
                    self.emission.header_declarations,
                    "extern {} {}_{}{};\t\t/* Mapped at index 0x{:04X}, subindex 0x{:02X} */\n",
                    resolved.storage, parent, name, suffix, self.index, sub_index
                )?;
                write!(
                    self.emission.mapped_variables,
                    "{} {}_{}{} = {};\t\t/* Mapped at index 0x{:04X}, subindex 0x{:02X} */\n",
                    resolved.storage, parent, name, suffix, literal.text, self.index, sub_index
                )?;
                self.emission.mapped_count += 1;
            } else {
                write!(
                    self.content,
                    "                    {} {}_obj{:04X}_{}{} = {};{}\n",
                    resolved.storage,
                    self.node,
                    self.index,
                    name,
                    suffix,
                    literal.text,
                    literal.comment
                )?;
            }
        }
        Ok(())
    }

    fn write_callbacks(&mut self, sub_count: usize) -> Result<(), GenError> {
        if !self.entry.has_callbacks() {
            self.emission.callbacks.insert(self.index, String::new());
            return Ok(());
        }
        let name = if self.mapped {
            c_identifier(&self.entry.name)
        } else {
            c_identifier(&format!("{}_Index{:04X}", self.node, self.index))
        };
        write!(
            self.content,
            "                    ODCallback_t {}_callbacks[] = \n                     {{\n",
            name
        )?;
        for _ in 0..sub_count {
            self.content.push_str("                       NULL,\n");
        }
        self.content.push_str("                     };\n");
        self.emission
            .callbacks
            .insert(self.index, format!("*callbacks = {}_callbacks; ", name));
        Ok(())
    }

    /// Name of the variable backing `sub_index`, as referenced by the table.
    fn backing_name(&self, sub_index: u8, sub: &SubEntry) -> String {
        let structure = self.entry.structure;
        let name = if sub_index == 0 {
            if structure.contains(StructFlags::MULTIPLE_SUBINDEXES) {
                format!("{}_highestSubIndex_obj{:04X}", self.node, self.index)
            } else if self.mapped {
                format_name(&sub.name)
            } else {
                format!("{}_obj{:04X}", self.node, self.index)
            }
        } else if structure.contains(StructFlags::IDENTICAL_SUBINDEXES) {
            if self.mapped {
                format!("{}[{}]", format_name(&self.entry.name), sub_index - 1)
            } else {
                format!("{}_obj{:04X}[{}]", self.node, self.index, sub_index - 1)
            }
        } else if self.mapped {
            format!("{}_{}", c_identifier(&self.entry.name), format_name(&sub.name))
        } else {
            format!("{}_obj{:04X}_{}", self.node, self.index, format_name(&sub.name))
        };
        undigit_name(&name)
    }

    fn write_subindex_table(&mut self, values: &[ObjectValue]) -> Result<(), GenError> {
        let identical = self
            .entry
            .structure
            .contains(StructFlags::IDENTICAL_SUBINDEXES);
        write!(
            self.content,
            "                    subindex {}_Index{:04X}[] = \n                     {{\n",
            self.node, self.index
        )?;

        let last = values.len() - 1;
        for (position, value) in values.iter().enumerate() {
            let sub_index = position as u8;
            let sub = self.sub_entry(sub_index)?;
            let mut resolved = if identical {
                self.resolve_sub(sub, &values[1..])?
            } else {
                self.resolve_sub(sub, [value])?
            };
            if sub_index == 0 && self.index == IDX_PREDEFINED_ERROR_FIELD_AU32 {
                resolved = EMC_RANGE;
            }

            let name = self.backing_name(sub_index, sub);
            let size = self.size_column(&resolved, value, sub_index)?;
            let save = if sub.save { "|TO_BE_SAVE" } else { "" };
            let sep = if position == last { "" } else { "," };
            writeln!(
                self.content,
                "                       {{ {}{}, {}, {}, (void*)&{} }}{}",
                sub.access.as_str(),
                save,
                resolved.kind,
                size,
                name,
                sep
            )?;

            if let Some(alias) = self.aliases.get(&(self.index, sub_index)) {
                writeln!(
                    self.emission.pointed_variables,
                    "{}* {} = &{};",
                    resolved.storage, alias, name
                )?;
            }
        }
        self.content.push_str("                     };\n");
        Ok(())
    }

    fn size_column(
        &self,
        resolved: &ResolvedType,
        value: &ObjectValue,
        sub_index: u8,
    ) -> Result<String, GenError> {
        let byte_len = || {
            value.byte_len().ok_or_else(|| GenError::InvalidValue {
                index: self.index,
                sub_index,
                kind: resolved.kind.to_string(),
            })
        };
        Ok(match resolved.kind {
            SemanticKind::VisibleString => byte_len()?
                .max(self.resolver.default_string_size())
                .to_string(),
            SemanticKind::Domain => byte_len()?.to_string(),
            _ => format!("sizeof ({})", resolved.storage),
        })
    }
}
