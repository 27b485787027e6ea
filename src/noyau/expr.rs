// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Rat : rationnel exact (les décimaux du pavé sont des rationnels)
// - Neg : moins unaire
// - Mod : modulo "plancher" (signe du diviseur)
//
// IMPORTANT :
// - aucune valeur n’est arrondie ici; l’arrondi d’affichage vit dans format.rs.

use num_rational::BigRational;
use num_traits::Zero;

use std::fmt;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation exacte.
    pub fn evaluer(&self) -> Result<BigRational, ErreurEval> {
        use Expr::*;

        match self {
            Rat(r) => Ok(r.clone()),
            Neg(x) => Ok(-x.evaluer()?),

            Add(a, b) => Ok(a.evaluer()? + b.evaluer()?),
            Sub(a, b) => Ok(a.evaluer()? - b.evaluer()?),
            Mul(a, b) => Ok(a.evaluer()? * b.evaluer()?),

            Div(a, b) => {
                let (x, y) = (a.evaluer()?, b.evaluer()?);
                if y.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(x / y)
            }

            Mod(a, b) => {
                let (x, y) = (a.evaluer()?, b.evaluer()?);
                if y.is_zero() {
                    return Err(ErreurEval::ModuloParZero);
                }
                // x - y*floor(x/y)
                let q = (&x / &y).floor();
                Ok(x - y * q)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Rat(r) => write!(f, "{r}"),
            Neg(x) => write!(f, "-({x})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Mod(a, b) => write!(f, "({a}%{b})"),
        }
    }
}
