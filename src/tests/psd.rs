#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::psd_catalog;

    #[test]
    fn records() {
        let reader = PsdReader::from_path(psd_catalog()).unwrap();
        let records = reader.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 5);

        let models = records
            .iter()
            .map(|r| {
                (
                    r.east.model_number(),
                    r.north.model_number(),
                    r.up.model_number(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(models, vec![(3, 3, 4), (0, 0, 0), (2, 1, 0), (1, 1, 2), (2, 0, 0)]);

        assert_eq!(
            records[3].east,
            PsdModel::Logarithmic {
                a1: -1502.11,
                t1: 0.0721
            }
        );
        assert_eq!(records[4].earthquake, from_year_doy_seconds(2030, 1, 0));
    }
    #[test]
    fn accumulation() {
        let t = parse_year_doy("2017-143").unwrap();
        let mut reader = PsdReader::from_path(psd_catalog()).unwrap();
        let corrections = accumulate(
            &mut reader,
            &["ANTC".to_string(), "MATE".to_string()],
            Matching::Code,
            t,
        )
        .unwrap();
        assert_eq!(corrections.len(), 2);

        let maule = from_year_doy_seconds(2010, 58, 23656);
        let illapel = from_year_doy_seconds(2015, 259, 82693);
        let (dt1, dt2) = (decimal_years(maule, t), decimal_years(illapel, t));

        let east = -192.03 * (1.0 + dt1 / 0.5969).ln()
            - 72.74 * (1.0 - (-dt1 / 0.0799).exp())
            - 12.41 * (1.0 - (-dt2 / 0.34).exp());
        let north = 61.57 * (1.0 + dt1 / 2.1357).ln()
            + 26.26 * (1.0 - (-dt1 / 0.2294).exp())
            + 4.82 * (1.0 + dt2 / 0.05).ln();
        let up = 157.62 * (1.0 - (-dt1 / 3.3132).exp()) + 25.61 * (1.0 - (-dt1 / 0.1854).exp());

        let antc = &corrections[0];
        assert_eq!(antc.site.code(), "ANTC");
        assert!((antc.x - east).abs() < 1.0E-9, "bad east {}", antc.x);
        assert!((antc.y - north).abs() < 1.0E-9, "bad north {}", antc.y);
        assert!((antc.z - up).abs() < 1.0E-9, "bad up {}", antc.z);

        let mate = &corrections[1];
        assert_eq!(mate.site.code(), "MATE");
        assert_eq!(mate.xyz(), (0.0, 0.0, 0.0));
    }
    #[test]
    fn before_any_earthquake() {
        let t = from_year_doy_seconds(2005, 1, 0);
        let mut reader = PsdReader::from_path(psd_catalog()).unwrap();
        let corrections =
            accumulate(&mut reader, &["41719M002".to_string()], Matching::Domes, t).unwrap();
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].site.to_string(), "CONZ 41719M002");
        assert_eq!(corrections[0].xyz(), (0.0, 0.0, 0.0));
    }
    #[test]
    fn on_earthquake_epoch() {
        let t = from_year_doy_seconds(2010, 58, 23656);
        let mut reader = PsdReader::from_path(psd_catalog()).unwrap();
        let corrections =
            accumulate(&mut reader, &["CONZ".to_string()], Matching::Code, t).unwrap();
        assert_eq!(corrections[0].xyz(), (0.0, 0.0, 0.0));
    }
}
