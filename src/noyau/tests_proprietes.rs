//! Propriétés (proptest) : saisie de chiffres, point unique, clear.

use proptest::prelude::*;

use super::operateur::Operateur;
use super::Evaluateur;

fn chiffres() -> impl Strategy<Value = String> {
    "[0-9]{1,24}"
}

proptest! {
    #[test]
    fn chiffres_concatenes_sans_zero_initial(s in chiffres()) {
        let mut e = Evaluateur::new();
        for c in s.chars() {
            e.append_digit(c);
        }
        // le "0" par défaut est remplacé, comme tout zéro de tête isolé
        let attendu = s.trim_start_matches('0');
        let attendu = if attendu.is_empty() { "0" } else { attendu };
        prop_assert_eq!(e.current_text(), attendu);
    }

    #[test]
    fn un_seul_point(avant in "[1-9][0-9]{0,6}", apres in "[0-9]{0,6}", points in 1usize..5) {
        let mut e = Evaluateur::new();
        for c in avant.chars() {
            e.append_digit(c);
        }
        for _ in 0..points {
            e.append_decimal_point();
        }
        for c in apres.chars() {
            e.append_digit(c);
            e.append_decimal_point();
        }
        prop_assert_eq!(e.current_text(), format!("{avant}.{apres}"));
    }

    #[test]
    fn clear_revient_a_l_etat_initial(
        a in chiffres(),
        b in chiffres(),
        op in prop::sample::select(Operateur::TOUS.to_vec()),
        egal in any::<bool>(),
    ) {
        let mut e = Evaluateur::new();
        a.chars().for_each(|c| e.append_digit(c));
        e.request_operation(op);
        b.chars().for_each(|c| e.append_digit(c));
        if egal {
            e.compute();
        }
        e.clear();
        prop_assert_eq!(e.current_text(), "0");
        prop_assert_eq!(e.previous_text(), "");
        prop_assert!(e.pending_operator().is_none());
    }

    #[test]
    fn addition_entiers_exacte(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut e = Evaluateur::new();
        a.to_string().chars().for_each(|c| e.append_digit(c));
        e.request_operation(Operateur::Plus);
        b.to_string().chars().for_each(|c| e.append_digit(c));
        e.compute();
        prop_assert_eq!(e.current_text(), (u64::from(a) + u64::from(b)).to_string());
    }
}
