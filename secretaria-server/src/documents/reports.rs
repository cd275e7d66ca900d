//! CSV export of the entity collections
//!
//! RFC 4180 quoting: fields containing commas, quotes or newlines are
//! wrapped in double quotes with inner quotes doubled. Output is UTF-8
//! with a header row, one line per entity.

use shared::models::{Church, Member};

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

const MEMBER_HEADER: &[&str] = &[
    "Nome Completo",
    "Data de Nascimento",
    "Idade",
    "RG",
    "CPF",
    "Telefone",
    "E-mail",
    "Endereço",
    "Número",
    "Bairro",
    "Cidade",
    "Estado",
    "CEP",
    "Estado Civil",
    "Profissão",
    "Cargo Ministerial",
    "Data de Batismo",
    "Data de Ordenação",
    "Igreja de Batismo",
    "Ativo",
    "Observações",
];

pub fn members_csv(members: &[Member]) -> String {
    let mut lines = Vec::with_capacity(members.len() + 1);
    lines.push(csv_line(
        &MEMBER_HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    for m in members {
        lines.push(csv_line(&[
            m.nome_completo.clone(),
            m.data_nascimento.clone(),
            m.idade.to_string(),
            m.rg.clone(),
            m.cpf.clone(),
            m.telefone.clone(),
            m.email.clone(),
            m.endereco.clone(),
            m.numero.clone(),
            m.bairro.clone(),
            m.cidade.clone(),
            m.estado.clone(),
            m.cep.clone(),
            m.estado_civil.as_str().to_string(),
            m.profissao.clone(),
            m.cargo_ministerial.as_str().to_string(),
            m.data_batismo.clone(),
            m.data_ordenacao.clone().unwrap_or_default(),
            m.igreja_batismo.clone(),
            if m.ativo { "Sim" } else { "Não" }.to_string(),
            m.observacoes.clone(),
        ]));
    }
    lines.join("\r\n") + "\r\n"
}

const CHURCH_HEADER: &[&str] = &[
    "Nome",
    "Classificação",
    "Tipo",
    "Rua",
    "Número",
    "Bairro",
    "Cidade",
    "Estado",
    "CEP",
    "Pastor",
    "Telefone do Pastor",
    "Membros Iniciais",
    "Membros Atuais",
    "Almas Batizadas",
    "Escola de Crianças",
    "Dias de Funcionamento",
];

pub fn churches_csv(churches: &[Church]) -> String {
    let mut lines = Vec::with_capacity(churches.len() + 1);
    lines.push(csv_line(
        &CHURCH_HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    for c in churches {
        lines.push(csv_line(&[
            c.nome.clone(),
            c.classificacao.clone(),
            c.tipo.clone(),
            c.endereco.rua.clone(),
            c.endereco.numero.clone(),
            c.endereco.bairro.clone(),
            c.endereco.cidade.clone(),
            c.endereco.estado.clone(),
            c.endereco.cep.clone(),
            c.pastor.nome.clone(),
            c.pastor.telefone.clone(),
            c.membros_iniciais.to_string(),
            c.membros_atuais.to_string(),
            c.almas_batizadas.to_string(),
            if c.tem_escola_criancas { "Sim" } else { "Não" }.to_string(),
            c.dias_funcionamento.clone(),
        ]));
    }
    lines.join("\r\n") + "\r\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        assert_eq!(csv_field("simples"), "simples");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("diz \"oi\""), "\"diz \"\"oi\"\"\"");
        assert_eq!(csv_field("linha\nquebrada"), "\"linha\nquebrada\"");
    }

    #[test]
    fn members_csv_has_header_and_one_line_per_member() {
        let members = vec![
            Member {
                nome_completo: "Silva, Ana".into(),
                ..Default::default()
            },
            Member {
                nome_completo: "Bia Costa".into(),
                ..Default::default()
            },
        ];

        let csv = members_csv(&members);
        let lines: Vec<&str> = csv.trim_end().split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Nome Completo,"));
        assert!(lines[1].starts_with("\"Silva, Ana\""));
        assert!(lines[1].contains("Sim"));
    }

    #[test]
    fn churches_csv_flattens_address_and_pastor() {
        let churches = vec![Church {
            nome: "Igreja Central".into(),
            pastor: shared::models::Pastor {
                nome: "Pr. João".into(),
                ..Default::default()
            },
            membros_atuais: 63,
            ..Default::default()
        }];

        let csv = churches_csv(&churches);
        assert!(csv.contains("Pr. João"));
        assert!(csv.contains(",63,"));
    }
}
