#[cfg(test)]
mod tests {
    use crate::{
        conjugation::{
            conjugate,
            conjugate_request,
            stem,
            strip_polite_suffix,
            ConjugationRequest,
            Inflection,
            StemKind,
        },
        core::{
            ConjugationError,
            VerbClass,
            VerbRecord,
        },
    };

    fn verb(kana: &str, kanji: Option<&str>, class: VerbClass, ending: &str) -> VerbRecord {
        VerbRecord::new(kana, kanji, class, ending, "").unwrap()
    }

    /// Kanji-preferred conjugation, the way questions render answers.
    fn inflect(verb: &VerbRecord, inflection: Inflection) -> String {
        conjugate(verb, inflection, true, true).unwrap()
    }

    fn sample_verbs() -> Vec<VerbRecord> {
        vec![
            verb("あう", Some("会う"), VerbClass::Godan, "u"),
            verb("かく", Some("書く"), VerbClass::Godan, "ku"),
            verb("およぐ", Some("泳ぐ"), VerbClass::Godan, "gu"),
            verb("はなす", Some("話す"), VerbClass::Godan, "su"),
            verb("まつ", Some("待つ"), VerbClass::Godan, "tsu"),
            verb("しぬ", Some("死ぬ"), VerbClass::Godan, "nu"),
            verb("あそぶ", Some("遊ぶ"), VerbClass::Godan, "bu"),
            verb("よむ", Some("読む"), VerbClass::Godan, "mu"),
            verb("かえる", Some("帰る"), VerbClass::Godan, "ru"),
            verb("せがむ", None, VerbClass::Godan, "mu"),
            verb("たべる", Some("食べる"), VerbClass::Ichidan, "ru"),
            verb("みる", Some("見る"), VerbClass::Ichidan, "ru"),
            verb("べんきょうする", Some("勉強する"), VerbClass::Suru, "suru"),
            verb("くる", Some("来る"), VerbClass::Kuru, "kuru"),
            verb("もってくる", Some("持ってくる"), VerbClass::Kuru, "kuru"),
        ]
    }

    #[test]
    fn plain_form_of_godan_verb() {
        let au = verb("あう", Some("会う"), VerbClass::Godan, "u");
        assert_eq!(conjugate(&au, Inflection::Plain, true, true).unwrap(), "会う");
        assert_eq!(conjugate(&au, Inflection::Plain, false, true).unwrap(), "あう");

        let segamu = verb("せがむ", None, VerbClass::Godan, "mu");
        assert_eq!(inflect(&segamu, Inflection::Plain), "せがむ");
    }

    #[test]
    fn ichidan_masu_form() {
        let taberu = verb("たべる", Some("食べる"), VerbClass::Ichidan, "ru");
        assert_eq!(inflect(&taberu, Inflection::Polite), "食べます");
    }

    #[test]
    fn ichidan_plain_is_dictionary_form() {
        let ichidan: Vec<VerbRecord> =
            sample_verbs().into_iter().filter(|v| v.class() == VerbClass::Ichidan).collect();
        assert!(!ichidan.is_empty());

        for v in &ichidan {
            assert_eq!(conjugate(v, Inflection::Plain, true, true).unwrap(), v.headword());
            assert_eq!(conjugate(v, Inflection::Plain, false, true).unwrap(), v.kana());
        }
    }

    #[test]
    fn ichidan_full_table() {
        let taberu = verb("たべる", Some("食べる"), VerbClass::Ichidan, "ru");
        let expected = [
            (Inflection::Plain, "食べる"),
            (Inflection::NegativePlain, "食べない"),
            (Inflection::PastPlain, "食べた"),
            (Inflection::NegativePastPlain, "食べなかった"),
            (Inflection::Polite, "食べます"),
            (Inflection::NegativePolite, "食べません"),
            (Inflection::PastPolite, "食べました"),
            (Inflection::NegativePastPolite, "食べませんでした"),
            (Inflection::TeForm, "食べて"),
        ];
        for (inflection, form) in expected {
            assert_eq!(inflect(&taberu, inflection), form, "{}", inflection);
        }
    }

    #[test]
    fn godan_mutation_table() {
        // (kana, kanji, ending, negative, polite, te, past)
        let cases = [
            ("かう", "買う", "u", "買わない", "買います", "買って", "買った"),
            ("かく", "書く", "ku", "書かない", "書きます", "書いて", "書いた"),
            ("およぐ", "泳ぐ", "gu", "泳がない", "泳ぎます", "泳いで", "泳いだ"),
            ("はなす", "話す", "su", "話さない", "話します", "話して", "話した"),
            ("まつ", "待つ", "tsu", "待たない", "待ちます", "待って", "待った"),
            ("しぬ", "死ぬ", "nu", "死なない", "死にます", "死んで", "死んだ"),
            ("あそぶ", "遊ぶ", "bu", "遊ばない", "遊びます", "遊んで", "遊んだ"),
            ("よむ", "読む", "mu", "読まない", "読みます", "読んで", "読んだ"),
            ("かえる", "帰る", "ru", "帰らない", "帰ります", "帰って", "帰った"),
        ];

        for (kana, kanji, ending, negative, polite, te, past) in cases {
            let v = verb(kana, Some(kanji), VerbClass::Godan, ending);
            assert_eq!(inflect(&v, Inflection::NegativePlain), negative);
            assert_eq!(inflect(&v, Inflection::Polite), polite);
            assert_eq!(inflect(&v, Inflection::TeForm), te);
            assert_eq!(inflect(&v, Inflection::PastPlain), past);
        }
    }

    #[test]
    fn kana_rendering_mutates_kana() {
        let kaku = verb("かく", Some("書く"), VerbClass::Godan, "ku");
        assert_eq!(conjugate(&kaku, Inflection::NegativePastPolite, false, true).unwrap(), "かきませんでした");
        assert_eq!(conjugate(&kaku, Inflection::NegativePastPlain, false, true).unwrap(), "かかなかった");
    }

    #[test]
    fn suru_verbs() {
        let benkyou = verb("べんきょうする", Some("勉強する"), VerbClass::Suru, "suru");
        assert_eq!(inflect(&benkyou, Inflection::NegativePlain), "勉強しない");
        assert_eq!(inflect(&benkyou, Inflection::Polite), "勉強します");
        assert_eq!(inflect(&benkyou, Inflection::TeForm), "勉強して");
        assert_eq!(conjugate(&benkyou, Inflection::PastPlain, false, true).unwrap(), "べんきょうした");

        let suru = verb("する", None, VerbClass::Suru, "suru");
        assert_eq!(inflect(&suru, Inflection::NegativePastPlain), "しなかった");
    }

    #[test]
    fn kuru_keeps_kanji_but_changes_reading() {
        let kuru = verb("くる", Some("来る"), VerbClass::Kuru, "kuru");
        assert_eq!(inflect(&kuru, Inflection::NegativePlain), "来ない");
        assert_eq!(inflect(&kuru, Inflection::Polite), "来ます");
        assert_eq!(inflect(&kuru, Inflection::TeForm), "来て");
        assert_eq!(inflect(&kuru, Inflection::PastPlain), "来た");

        assert_eq!(conjugate(&kuru, Inflection::NegativePlain, false, true).unwrap(), "こない");
        assert_eq!(conjugate(&kuru, Inflection::NegativePastPolite, false, true).unwrap(), "きませんでした");
        assert_eq!(conjugate(&kuru, Inflection::TeForm, false, true).unwrap(), "きて");

        let motte_kuru = verb("もってくる", Some("持って来る"), VerbClass::Kuru, "kuru");
        assert_eq!(inflect(&motte_kuru, Inflection::PastPolite), "持って来ました");
        assert_eq!(conjugate(&motte_kuru, Inflection::NegativePlain, false, true).unwrap(), "もってこない");
    }

    #[test]
    fn irregular_godan_exceptions() {
        let iku = verb("いく", Some("行く"), VerbClass::Godan, "ku");
        assert_eq!(inflect(&iku, Inflection::TeForm), "行って");
        assert_eq!(inflect(&iku, Inflection::PastPlain), "行った");
        assert_eq!(inflect(&iku, Inflection::Polite), "行きます");
        assert_eq!(inflect(&iku, Inflection::NegativePlain), "行かない");

        let aru = verb("ある", None, VerbClass::Godan, "ru");
        assert_eq!(inflect(&aru, Inflection::NegativePlain), "ない");
        assert_eq!(inflect(&aru, Inflection::NegativePastPlain), "なかった");
        assert_eq!(inflect(&aru, Inflection::Polite), "あります");
        assert_eq!(inflect(&aru, Inflection::PastPlain), "あった");

        let kudasaru = verb("くださる", Some("下さる"), VerbClass::Godan, "ru");
        assert_eq!(inflect(&kudasaru, Inflection::Polite), "下さいます");
        assert_eq!(inflect(&kudasaru, Inflection::NegativePlain), "下さらない");

        let tou = verb("とう", Some("問う"), VerbClass::Godan, "u");
        assert_eq!(inflect(&tou, Inflection::TeForm), "問うて");
    }

    #[test]
    fn missing_kanji_when_kanji_is_mandatory() {
        let segamu = verb("せがむ", None, VerbClass::Godan, "mu");
        let result = conjugate(&segamu, Inflection::Polite, true, false);
        assert!(matches!(result, Err(ConjugationError::MissingForm { rendering: "kanji", .. })));

        // Falls back to kana when allowed
        assert_eq!(conjugate(&segamu, Inflection::Polite, true, true).unwrap(), "せがみます");
    }

    #[test]
    fn no_rendering_requested() {
        let au = verb("あう", Some("会う"), VerbClass::Godan, "u");
        let result = conjugate(&au, Inflection::Plain, false, false);
        assert!(matches!(result, Err(ConjugationError::MissingForm { .. })));
    }

    #[test]
    fn kuru_compound_spelled_with_kana_ending() {
        let motte_kuru = verb("もってくる", Some("持ってくる"), VerbClass::Kuru, "kuru");
        assert_eq!(inflect(&motte_kuru, Inflection::Plain), "持ってくる");
        assert_eq!(inflect(&motte_kuru, Inflection::NegativePlain), "持ってこない");
        assert_eq!(inflect(&motte_kuru, Inflection::Polite), "持ってきます");
        assert_eq!(inflect(&motte_kuru, Inflection::TeForm), "持ってきて");
        assert_eq!(inflect(&motte_kuru, Inflection::PastPlain), "持ってきた");

        let tsurete_kuru = verb("つれてくる", Some("連れてくる"), VerbClass::Kuru, "kuru");
        assert_eq!(inflect(&tsurete_kuru, Inflection::NegativePastPolite), "連れてきませんでした");
        assert_eq!(
            stem(&tsurete_kuru, StemKind::Negative, true, true).unwrap(),
            "連れてこ"
        );
    }

    #[test]
    fn polite_suffix_strips_back_to_stem() {
        let polite = [
            Inflection::Polite,
            Inflection::NegativePolite,
            Inflection::PastPolite,
            Inflection::NegativePastPolite,
        ];

        for v in sample_verbs() {
            for (kanji, kana) in [(true, true), (false, true)] {
                let expected_stem = stem(&v, StemKind::Continuative, kanji, kana).unwrap();

                for inflection in polite {
                    let form = conjugate(&v, inflection, kanji, kana).unwrap();
                    assert_eq!(strip_polite_suffix(&form), Some(expected_stem.as_str()), "{}", form);
                }
            }
        }
    }

    #[test]
    fn strip_polite_suffix_rejects_plain_forms() {
        assert_eq!(strip_polite_suffix("食べる"), None);
        assert_eq!(strip_polite_suffix("ます"), Some(""));
    }

    #[test]
    fn request_matches_direct_call() {
        let v = verb("はなす", Some("話す"), VerbClass::Godan, "su");
        let request = ConjugationRequest {
            verb: &v,
            target: Inflection::PastPolite,
            render_kanji: false,
            render_kana: true,
        };
        assert_eq!(conjugate_request(&request).unwrap(), "はなしました");
    }

    #[test]
    fn every_sample_verb_has_every_inflection() {
        for v in sample_verbs() {
            for inflection in Inflection::ALL {
                let form = conjugate(&v, inflection, true, true);
                assert!(form.is_ok(), "{} {}: {:?}", v, inflection, form);
                assert!(!form.unwrap().is_empty());
            }
        }
    }
}
