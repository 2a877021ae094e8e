//! Tests scientifiques (campagne) : les propriétés observables de l’évaluateur,
//! scénario par scénario, telles qu’un utilisateur les tape au clavier.

use super::operateur::Operateur;
use super::Evaluateur;

/// Rejoue une suite de touches séparées par des espaces.
/// Chiffres et points d’un même mot sont tapés un par un.
fn joue(touches: &str) -> Evaluateur {
    let mut e = Evaluateur::new();
    for mot in touches.split_whitespace() {
        match mot {
            "=" => e.compute(),
            "DEL" => e.delete_last(),
            "C" => e.clear(),
            _ if mot.chars().all(|c| c.is_ascii_digit() || c == '.') => {
                for c in mot.chars() {
                    if c == '.' {
                        e.append_decimal_point();
                    } else {
                        e.append_digit(c);
                    }
                }
            }
            _ => {
                let op: Operateur = mot
                    .parse()
                    .unwrap_or_else(|err| panic!("scénario {touches:?}: {err}"));
                e.request_operation(op);
            }
        }
    }
    e
}

fn assert_courant(touches: &str, attendu: &str) {
    let e = joue(touches);
    assert_eq!(e.current_text(), attendu, "touches={touches:?}");
}

fn assert_etat_initial(e: &Evaluateur) {
    assert_eq!(e.current_text(), "0");
    assert_eq!(e.previous_text(), "");
    assert!(e.pending_operator().is_none());
    assert_eq!(e.pending_expression_text(), "");
}

/* ------------------------ Accumulateur ------------------------ */

#[test]
fn sci_concatenation_litterale() {
    assert_courant("1 2 3 4 5 6 7 8 9 0", "1234567890");
    assert_courant("3.1415", "3.1415");
}

#[test]
fn sci_double_point() {
    assert_courant("1 . . 2", "1.2");
}

#[test]
fn sci_delete_plancher() {
    assert_courant("DEL", "0");
    assert_courant("12 DEL", "1");
    assert_courant("1 DEL", "0");
    assert_courant("1 DEL DEL DEL", "0");
}

/* ------------------------ Dispatcher ------------------------ */

#[test]
fn sci_pli_gauche_droite() {
    // pas de priorité : (2 + 3) * 4
    assert_courant("2 + 3 * 4 =", "20");
    // et pas (10 - (4 - 1))
    assert_courant("10 - 4 - 1 =", "5");
}

#[test]
fn sci_pli_visible_dans_l_expression() {
    let e = joue("2 + 3 *");
    assert_eq!(e.pending_expression_text(), "5 *");
    assert_eq!(e.current_text(), "");
}

#[test]
fn sci_unaire_immediat() {
    let e = joue("9 √");
    assert_eq!(e.current_text(), "3");
    assert!(e.pending_operator().is_none());
    assert_eq!(e.pending_expression_text(), "");
}

#[test]
fn sci_resultat_puis_chiffre_remplace() {
    let mut e = joue("5 + 3 =");
    assert_eq!(e.current_text(), "8");
    e.append_digit('2');
    assert_eq!(e.current_text(), "2");
}

#[test]
fn sci_division_par_zero_idempotente() {
    let mut e = joue("6 / 0 =");
    assert_eq!(e.current_text(), "Infinity");
    assert!(e.resultat_invalide());

    let avant = e.clone();
    e.compute();
    assert_eq!(e, avant);
}

#[test]
fn sci_clear_depuis_tout_etat() {
    for touches in ["", "7", "7 +", "7 + 8", "7 + 8 =", "9 √", "6 / 0 =", "1 . 5 ^"] {
        let mut e = joue(touches);
        e.clear();
        assert_etat_initial(&e);
    }
}

#[test]
fn sci_trig_radians() {
    let e = joue("1 sin");
    let x: f64 = e.current_text().parse().unwrap();
    assert!((x - 1f64.sin()).abs() < 1e-15);

    // cos(π) avec π tapé approximativement
    let e = joue("3.141592653589793 cos");
    assert_eq!(e.current_text(), "-1");
}

#[test]
fn sci_logarithmes() {
    assert_courant("100 log", "2");
    assert_courant("1 ln", "0");
    assert_courant("0 - 1 = log", "NaN");
    assert_courant("0 ln", "-Infinity");
}

#[test]
fn sci_flottants_ieee_visibles() {
    assert_courant(".1 + .2 =", "0.30000000000000004");
}

#[test]
fn sci_grands_resultats_en_exposant() {
    let mut e = joue("2 ^ 1000 =");
    assert_eq!(e.current_text(), "1.0715086071862673e301");

    // le résultat se relit : on peut continuer le calcul
    e.request_operation(Operateur::Divise);
    e.append_digit('2');
    e.compute();
    assert_eq!(e.current_text(), "5.357543035931337e300");
}
