//! Persisted netlist text format.
//!
//! A netlist file is a sequence of blocks: a net-name line, one or more
//! `x,y` integer coordinate lines, and the literal terminator line `END`.
//! The file ends with [`TRAILER_LINES`] metadata lines that belong to no
//! net and are skipped when parsing.

use std::fs;
use std::path::Path;

use hashbrown::HashSet;

use crate::error::NetlistError;
use crate::geometry::Point;

/// Number of trailing metadata lines every netlist file carries.
pub const TRAILER_LINES: usize = 3;

/// One electrical net: a name and the pins it must connect.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Net {
    pub name: String,
    pub pins: Vec<Point>,
}

/// All nets of one sample, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Netlist {
    nets: Vec<Net>,
}

impl Netlist {
    pub fn new(nets: Vec<Net>) -> Self {
        Netlist { nets }
    }

    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    pub fn from_file(path: &Path) -> Result<Self, NetlistError> {
        let text = fs::read_to_string(path).map_err(|source| NetlistError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, NetlistError> {
        let lines: Vec<&str> = text.lines().collect();
        let payload = lines.len().saturating_sub(TRAILER_LINES);

        let mut nets = Vec::new();
        let mut current: Option<Net> = None;

        for (number, raw) in lines[..payload].iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match current.take() {
                None => {
                    current = Some(Net {
                        name: line.to_owned(),
                        pins: Vec::new(),
                    });
                }
                Some(mut net) => {
                    if line == "END" {
                        nets.push(net);
                    } else {
                        net.pins.push(parse_pin(line, number + 1)?);
                        current = Some(net);
                    }
                }
            }
        }

        if let Some(net) = current {
            return Err(NetlistError::MissingEnd { net: net.name });
        }

        Ok(Netlist { nets })
    }

    /// Pin coordinates pooled across all nets, duplicates removed.
    pub fn pooled_pins(&self) -> Vec<Point> {
        let mut seen = HashSet::new();
        let mut pins = Vec::new();
        for net in &self.nets {
            for &pin in &net.pins {
                if seen.insert(pin) {
                    pins.push(pin);
                }
            }
        }
        pins
    }
}

fn parse_pin(line: &str, number: usize) -> Result<Point, NetlistError> {
    // Fields after x,y are ignored; older files carried a layer column.
    let mut fields = line.split(',').map(str::trim);
    let x = next_coordinate(&mut fields, line, number)?;
    let y = next_coordinate(&mut fields, line, number)?;
    Ok(Point::new(x, y))
}

fn next_coordinate<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: &str,
    number: usize,
) -> Result<i32, NetlistError> {
    let token = fields.next().ok_or_else(|| NetlistError::BadCoordinate {
        token: line.to_owned(),
        line: number,
    })?;
    token.parse().map_err(|_| NetlistError::BadCoordinate {
        token: token.to_owned(),
        line: number,
    })
}
