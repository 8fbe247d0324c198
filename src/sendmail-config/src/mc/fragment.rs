/*
 * Sendmail configuration generator
 * Copyright (C) 2022 viridIT SAS
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/

use crate::mc::{daemon_options::DaemonOptions, feature::Feature, ostype::Ostype};

/// Concatenation keys of the generated `sendmail.mc`.
///
/// Two-digit convention: lexical order equals numeric order, so the
/// renderer can sort fragments as plain strings.
pub mod order {
    /// `OSTYPE` selector line.
    pub const OSTYPE: &str = "05";
    /// `FEATURE` lines.
    pub const FEATURE: &str = "22";
    /// `DAEMON_OPTIONS` listener declarations.
    pub const DAEMON_OPTIONS: &str = "40";
}

/// One discrete, independently orderable unit of generated configuration
/// text.
///
/// Fragments are derived values: they are recomputed in full on every
/// [`crate::Config::select`] call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fragment {
    /// Identifier, unique within one selection pass.
    pub name: String,
    /// Two-digit concatenation key, see [`order`]. Fragments sharing a key
    /// keep the relative order in which they were enumerated.
    pub order: String,
    /// Literal m4 line emitted into the final file.
    pub content: String,
    /// see [`FragmentKind`]
    pub kind: FragmentKind,
}

/// The structured attributes of a [`Fragment`], one variant per fragment
/// family.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FragmentKind {
    /// An `OSTYPE` selector.
    Ostype(Ostype),
    /// A `FEATURE` invocation.
    Feature(Feature),
    /// A `DAEMON_OPTIONS` listener declaration.
    DaemonOptions(DaemonOptions),
}
