//! FEN encoding and decoding for [`Position`].
//!
//! This is the crate's only external text format: `Position` implements
//! `FromStr` for decoding and `Display` for encoding, and the two
//! round-trip exactly for any reachable position.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut pos = Position::empty();

        // FEN lists ranks from 8 down to 1.
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_index as i8;
            let mut file: i8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as i8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    let sq = Square::from_coords(rank, file).map_err(|_| {
                        FenError::BadRankWidth {
                            rank_index,
                            width: file as usize + 1,
                        }
                    })?;
                    pos.put(sq, piece);
                    file += 1;
                }
            }

            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank_index,
                    width: file as usize,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        pos.set_side_to_move(side_to_move);

        pos.set_castling(CastleRights::from_fen(fields[2])?);

        if fields[3] != "-" {
            let sq = Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
            pos.set_en_passant(Some(sq));
        }

        let halfmove_clock =
            fields[4]
                .parse::<u16>()
                .map_err(|_| FenError::InvalidCounter {
                    field: "halfmove clock",
                    found: fields[4].to_string(),
                })?;
        pos.set_halfmove_clock(halfmove_clock);

        let fullmove_number =
            fields[5]
                .parse::<u16>()
                .map_err(|_| FenError::InvalidCounter {
                    field: "fullmove number",
                    found: fields[5].to_string(),
                })?;
        pos.set_fullmove_number(fullmove_number);

        pos.validate()?;
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8i8 {
                let sq = Square::from_coords(rank, file).expect("loop stays on board");
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
