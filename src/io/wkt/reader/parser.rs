use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryTrait, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::wkt::reader::lexer::{Token, TokenKind};
use crate::io::MAX_NESTING_DEPTH;

/// Recursive descent over a token stream, one production per geometry kind.
pub(crate) struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    index: usize,
    /// Collections enclosing the geometry being parsed.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, tokens: &'a [Token], index: usize) -> Self {
        Self {
            input,
            tokens,
            index,
            depth: 0,
        }
    }

    /// Index of the next unconsumed token.
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Fail if any token is left after the last geometry.
    pub(crate) fn expect_end(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error_at(Some(token), "unexpected trailing token")),
        }
    }

    /// `geometry := keyword [dimension] (EMPTY | body)`
    pub(crate) fn parse_geometry(&mut self) -> Result<Geometry> {
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error_at(
                self.peek(),
                &format!("geometry nested deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }
        let geometry_type = match self.next() {
            Some(Token {
                kind: TokenKind::Keyword(geometry_type),
                ..
            }) => geometry_type,
            other => return Err(self.error_at(other.as_ref(), "expected geometry type keyword")),
        };

        let dim = match self.peek() {
            Some(Token {
                kind: TokenKind::Dimension(dim),
                ..
            }) => {
                let dim = *dim;
                self.index += 1;
                dim
            }
            _ => Dimension::XY,
        };

        if self.eat(TokenKind::Empty) {
            return Ok(empty_geometry(geometry_type, dim));
        }

        let geometry: Geometry = match geometry_type {
            GeometryType::Point => {
                self.expect(TokenKind::LeftParen)?;
                let coord = self.parse_coord(dim)?;
                self.expect(TokenKind::RightParen)?;
                Point::new(coord).into()
            }
            GeometryType::LineString => {
                LineString::try_new(dim, self.parse_coord_list(dim)?)?.into()
            }
            GeometryType::Polygon => self.parse_polygon_body(dim)?.into(),
            GeometryType::MultiPoint => {
                let points = self.parse_list(|parser| parser.parse_multi_point_member(dim))?;
                MultiPoint::try_new(dim, points)?.into()
            }
            GeometryType::MultiLineString => {
                let line_strings = self.parse_list(|parser| parser.parse_line_string_text(dim))?;
                MultiLineString::try_new(dim, line_strings)?.into()
            }
            GeometryType::MultiPolygon => {
                let polygons = self.parse_list(|parser| parser.parse_polygon_text(dim))?;
                MultiPolygon::try_new(dim, polygons)?.into()
            }
            GeometryType::GeometryCollection => {
                let members = self.parse_list(|parser| {
                    let start = parser.peek().copied();
                    parser.depth += 1;
                    let member = parser.parse_geometry();
                    parser.depth -= 1;
                    Ok((start, member?))
                })?;
                // report a mismatched member where it starts rather than at the collection
                if let Some((start, member)) = members
                    .iter()
                    .find(|(_, member)| !member.is_empty() && member.dim() != dim)
                {
                    let err = WkxError::DimensionMismatch {
                        expected: dim,
                        found: member.dim(),
                    };
                    return Err(self.error_at(start.as_ref(), &err.to_string()));
                }
                let geometries = members.into_iter().map(|(_, member)| member).collect();
                GeometryCollection::try_new(dim, geometries)?.into()
            }
        };
        Ok(geometry)
    }

    /// `( item (, item)* )`
    fn parse_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect(TokenKind::LeftParen)?;
        let mut items = vec![item(self)?];
        while self.eat(TokenKind::Comma) {
            items.push(item(self)?);
        }
        self.expect(TokenKind::RightParen)?;
        Ok(items)
    }

    /// A coordinate made of exactly `dim.size()` numbers.
    fn parse_coord(&mut self, dim: Dimension) -> Result<Coord> {
        let first = self.peek().copied();
        let mut ordinates = Vec::with_capacity(4);
        while let Some(Token {
            kind: TokenKind::Number(value),
            ..
        }) = self.peek()
        {
            ordinates.push(*value);
            self.index += 1;
        }

        if ordinates.is_empty() {
            return Err(self.error_at(first.as_ref(), "expected number"));
        }
        if ordinates.len() != dim.size() {
            return Err(self.error_at(
                first.as_ref(),
                &format!(
                    "expected {} ordinates, found {}",
                    dim.size(),
                    ordinates.len()
                ),
            ));
        }
        Ok(Coord::from_ordinates(dim, &ordinates))
    }

    fn parse_coord_list(&mut self, dim: Dimension) -> Result<Vec<Coord>> {
        self.parse_list(|parser| parser.parse_coord(dim))
    }

    /// A LineString body or `EMPTY`, as used for rings and multi line string members.
    fn parse_line_string_text(&mut self, dim: Dimension) -> Result<LineString> {
        if self.eat(TokenKind::Empty) {
            return Ok(LineString::empty(dim));
        }
        LineString::try_new(dim, self.parse_coord_list(dim)?)
    }

    fn parse_polygon_body(&mut self, dim: Dimension) -> Result<Polygon> {
        let rings = self.parse_list(|parser| parser.parse_line_string_text(dim))?;
        Polygon::try_new(dim, rings)
    }

    fn parse_polygon_text(&mut self, dim: Dimension) -> Result<Polygon> {
        if self.eat(TokenKind::Empty) {
            return Ok(Polygon::empty(dim));
        }
        self.parse_polygon_body(dim)
    }

    /// `(x y)`, `EMPTY`, or a bare coordinate `x y`.
    fn parse_multi_point_member(&mut self, dim: Dimension) -> Result<Point> {
        if self.eat(TokenKind::Empty) {
            return Ok(Point::empty(dim));
        }
        if self.eat(TokenKind::LeftParen) {
            let coord = self.parse_coord(dim)?;
            self.expect(TokenKind::RightParen)?;
            return Ok(Point::new(coord));
        }
        Ok(Point::new(self.parse_coord(dim)?))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).copied();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Consume the next token if it is of the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.eat(kind) {
            return Ok(());
        }
        let expected = match kind {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Empty => "'empty'",
            _ => "token",
        };
        Err(self.error_at(self.peek(), &format!("expected {expected}")))
    }

    fn error_at(&self, token: Option<&Token>, message: &str) -> WkxError {
        match token {
            Some(token) => WkxError::WktParse {
                message: message.to_string(),
                token: token.text(self.input).to_string(),
                position: token.position,
            },
            None => WkxError::WktParse {
                message: message.to_string(),
                token: "<end of input>".to_string(),
                position: self.input.chars().count(),
            },
        }
    }
}

fn empty_geometry(geometry_type: GeometryType, dim: Dimension) -> Geometry {
    match geometry_type {
        GeometryType::Point => Point::empty(dim).into(),
        GeometryType::LineString => LineString::empty(dim).into(),
        GeometryType::Polygon => Polygon::empty(dim).into(),
        GeometryType::MultiPoint => MultiPoint::empty(dim).into(),
        GeometryType::MultiLineString => MultiLineString::empty(dim).into(),
        GeometryType::MultiPolygon => MultiPolygon::empty(dim).into(),
        GeometryType::GeometryCollection => GeometryCollection::empty(dim).into(),
    }
}
