//! Character tables of the supported formats.
//!
//! The static tables are written as layered slices. They are merged into hash
//! maps once, on first use, and shared by every thread afterwards.

use std::{collections::HashMap, sync::OnceLock};

use crate::{ExportFlags, Format, ImportFlags, Pseudo};

pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod marks;

pub(crate) type ImportEntry = (char, Pseudo);
pub(crate) type ExportEntry = (Pseudo, char);
pub(crate) type MultiEntry = (Pseudo, &'static [char]);

struct Sources {
    /// Merged in order, later entries win.
    import: &'static [&'static [ImportEntry]],
    s_for_z: &'static [ImportEntry],
    /// Merged in order, later entries win.
    export: &'static [&'static [ExportEntry]],
    multi: &'static [MultiEntry],
    k_with_dot: &'static [ExportEntry],
    z_for_s: &'static [&'static [ExportEntry]],
}

fn sources(format: Format) -> Sources {
    match format {
        Format::UmschriftTtn => Sources {
            import: &[import::COMMON, import::UMSCHRIFT_TTN],
            s_for_z: import::UMSCHRIFT_TTN_S_FOR_Z,
            export: &[export::COMMON, export::UMSCHRIFT_TTN],
            multi: &[],
            k_with_dot: &[],
            // the font has no glyph for ś
            z_for_s: &[],
        },
        Format::Transliteration => Sources {
            import: &[import::COMMON, import::TRANSLITERATION],
            s_for_z: import::TRANSLITERATION_S_FOR_Z,
            export: &[export::COMMON, export::TRANSLITERATION],
            multi: &[],
            k_with_dot: &[],
            z_for_s: &[export::LEGACY_Z_FOR_S, export::TRANSLITERATION_Z_FOR_S],
        },
        Format::TrlitCgTimes => Sources {
            import: &[import::COMMON, import::TRLIT_CG_TIMES],
            s_for_z: import::TRLIT_CG_TIMES_S_FOR_Z,
            export: &[export::COMMON, export::TRLIT_CG_TIMES],
            multi: &[],
            k_with_dot: &[],
            z_for_s: &[export::LEGACY_Z_FOR_S, export::TRLIT_CG_TIMES_Z_FOR_S],
        },
        Format::TrlitCgTimes2023 => Sources {
            import: &[import::COMMON, import::TRLIT_CG_TIMES_2023],
            s_for_z: import::TRLIT_CG_TIMES_S_FOR_Z,
            export: &[
                export::COMMON,
                export::TRLIT_CG_TIMES,
                export::TRLIT_CG_TIMES_2023,
            ],
            multi: &[],
            k_with_dot: &[],
            z_for_s: &[export::LEGACY_Z_FOR_S, export::TRLIT_CG_TIMES_Z_FOR_S],
        },
        Format::Unicode => Sources {
            import: &[import::COMMON, import::UNICODE],
            s_for_z: import::UNICODE_S_FOR_Z,
            export: &[export::COMMON, export::UNICODE],
            multi: export::UNICODE_MULTI,
            k_with_dot: export::UNICODE_K_WITH_DOT,
            z_for_s: &[export::UNICODE_Z_FOR_S],
        },
    }
}

fn merge<K, V>(layers: &[&[(K, V)]]) -> HashMap<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy,
{
    layers.iter().flat_map(|layer| layer.iter().copied()).collect()
}

/// Decoding table of one format.
#[derive(Debug)]
pub(crate) struct ImportTable {
    chars: HashMap<char, Pseudo>,
    s_for_z: HashMap<char, Pseudo>,
}

impl ImportTable {
    fn build(format: Format) -> Self {
        let sources = sources(format);
        let table = ImportTable {
            chars: merge(sources.import),
            s_for_z: merge(&[sources.s_for_z]),
        };
        tracing::trace!(%format, entries = table.chars.len(), "built import table");
        table
    }

    /// Looks up a single source character.
    pub(crate) fn get(&self, ch: char, flags: ImportFlags) -> Option<Pseudo> {
        if flags.contains(ImportFlags::S_FOR_Z) {
            if let Some(&p) = self.s_for_z.get(&ch) {
                return Some(p);
            }
        }
        self.chars.get(&ch).copied()
    }
}

/// Encoding table of one format.
#[derive(Debug)]
pub(crate) struct ExportTable {
    base: HashMap<Pseudo, char>,
    multi: HashMap<Pseudo, &'static [char]>,
    k_with_dot: HashMap<Pseudo, char>,
    j_for_yod: HashMap<Pseudo, char>,
    z_for_s: HashMap<Pseudo, char>,
}

impl ExportTable {
    fn build(format: Format) -> Self {
        let sources = sources(format);
        let table = ExportTable {
            base: merge(sources.export),
            multi: merge(&[sources.multi]),
            k_with_dot: merge(&[sources.k_with_dot]),
            j_for_yod: merge(&[export::J_FOR_YOD]),
            z_for_s: merge(sources.z_for_s),
        };
        tracing::trace!(
            %format,
            entries = table.base.len() + table.multi.len(),
            "built export table"
        );
        table
    }

    /// Appends the rendering of `p` to `out`, returning `false` if no table
    /// maps it.
    ///
    /// Option tables come first, then multi-character renderings, then the
    /// base table.
    pub(crate) fn render(&self, p: Pseudo, flags: ExportFlags, out: &mut String) -> bool {
        if flags.contains(ExportFlags::Z_FOR_S_AND_S_FOR_S_ACUTE) {
            if let Some(&ch) = self.z_for_s.get(&p) {
                out.push(ch);
                return true;
            }
        }
        if let Some(chars) = self.multi.get(&p) {
            out.extend(chars.iter());
            return true;
        }
        if flags.contains(ExportFlags::K_WITH_DOT) {
            if let Some(&ch) = self.k_with_dot.get(&p) {
                out.push(ch);
                return true;
            }
        }
        if flags.contains(ExportFlags::J_FOR_YOD) {
            if let Some(&ch) = self.j_for_yod.get(&p) {
                out.push(ch);
                return true;
            }
        }
        match self.base.get(&p) {
            Some(&ch) => {
                out.push(ch);
                true
            }
            None => false,
        }
    }
}

struct Registry {
    import: Vec<ImportTable>,
    export: Vec<ExportTable>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry {
        import: Format::ALL.iter().map(|&f| ImportTable::build(f)).collect(),
        export: Format::ALL.iter().map(|&f| ExportTable::build(f)).collect(),
    })
}

pub(crate) fn import_table(format: Format) -> &'static ImportTable {
    &registry().import[format.index()]
}

pub(crate) fn export_table(format: Format) -> &'static ExportTable {
    &registry().export[format.index()]
}
