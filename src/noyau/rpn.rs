// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Précédences : + - (1) < * / % (2) < moins unaire (3)
// - Binaires associatifs à gauche.
// - Moins unaire : '-' qui arrive quand on n’attend PAS une valeur devient Tok::Neg,
//   opérateur préfixe : il ne dépile rien, il sort dès qu’un binaire le suit.
//   Donc "2*-3" => "2 3 neg *" (et non "2 0 * 3 -").

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(12), Plus, Minus, Num(3)]
///   rpn:    [Num(12), Num(3), Neg, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurEval::ParentheseOrpheline);
                }
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                ops.push(Tok::Neg);
            }

            Tok::Neg => ops.push(tok),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Expr::Rat(r)),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                let b = Box::new(st.pop().ok_or(ErreurEval::ExpressionInvalide)?);
                let a = Box::new(st.pop().ok_or(ErreurEval::ExpressionInvalide)?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Mod(a, b),
                };
                st.push(e);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
