// src/common/format.rs
//
// Formatação de valores para as respostas da API, no mesmo padrão
// do restante do sistema: preço em reais e datas dd-mm-aaaa.

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn formatar_preco(preco: Decimal) -> String {
    format!("R$ {}", format!("{:.2}", preco).replace('.', ","))
}

pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn preco_com_virgula_e_prefixo() {
        let preco = Decimal::from_str("1234.5").unwrap();
        assert_eq!(formatar_preco(preco), "R$ 1234,50");
    }

    #[test]
    fn preco_inteiro_ganha_casas_decimais() {
        assert_eq!(formatar_preco(Decimal::from(10)), "R$ 10,00");
    }

    #[test]
    fn data_no_padrao_brasileiro() {
        let data = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(formatar_data(data), "07-03-2025");
    }
}
