// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // modulo

    // Moins unaire : jamais produit par tokenize(), seulement par to_rpn().
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne (syntaxe évaluateur, glyphes déjà normalisés).
/// Supporte:
/// - nombres décimaux : 12, 1.5, 3. , .5 (exacts, sans flottants)
/// - opérateurs + - * / %
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres, au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !point)) {
                if chars[i] == '.' {
                    point = true;
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_decimal(&texte)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12.50" -> 1250/100 (réduit), exact.
fn parse_decimal(texte: &str) -> Result<BigRational, ErreurEval> {
    let (ent, frac) = texte.split_once('.').unwrap_or((texte, ""));
    if ent.is_empty() && frac.is_empty() {
        return Err(ErreurEval::NombreInvalide(texte.to_string()));
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(texte.to_string()))?;

    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => {
                if r.denom().is_one() {
                    format!("{}", r.numer())
                } else {
                    format!("{}/{}", r.numer(), r.denom())
                }
            }
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
