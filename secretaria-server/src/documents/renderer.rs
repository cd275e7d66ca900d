//! Placeholder substitution for printable documents
//!
//! Templates are plain text with `{token}` placeholders. Replacement is
//! literal: no conditionals, no escaping, and a token with no value stays
//! verbatim in the output so a typo is visible in the printed document
//! instead of silently vanishing.

use std::collections::BTreeMap;

use shared::models::Member;

/// Replace every known `{token}` in `template` with its value
pub fn render_template(template: &str, values: &BTreeMap<&str, String>) -> String {
    let mut output = template.to_string();
    for (token, value) in values {
        output = output.replace(&format!("{{{token}}}"), value);
    }
    output
}

/// Token table for member documents
pub fn member_tokens(member: &Member) -> BTreeMap<&'static str, String> {
    let mut tokens = BTreeMap::new();
    tokens.insert("nome", member.nome_completo.clone());
    tokens.insert("dataNascimento", member.data_nascimento.clone());
    tokens.insert("idade", member.idade.to_string());
    tokens.insert("rg", member.rg.clone());
    tokens.insert("cpf", member.cpf.clone());
    tokens.insert("telefone", member.telefone.clone());
    tokens.insert("email", member.email.clone());
    tokens.insert(
        "endereco",
        format!("{}, {}", member.endereco, member.numero),
    );
    tokens.insert("bairro", member.bairro.clone());
    tokens.insert("cidade", member.cidade.clone());
    tokens.insert("estado", member.estado.clone());
    tokens.insert("cep", member.cep.clone());
    tokens.insert("estadoCivil", member.estado_civil.as_str().to_string());
    tokens.insert("profissao", member.profissao.clone());
    tokens.insert(
        "cargoMinisterial",
        member.cargo_ministerial.as_str().to_string(),
    );
    tokens.insert("dataBatismo", member.data_batismo.clone());
    tokens.insert(
        "dataOrdenacao",
        member.data_ordenacao.clone().unwrap_or_default(),
    );
    tokens.insert("igrejaBatismo", member.igreja_batismo.clone());
    tokens.insert(
        "dataAtual",
        chrono::Local::now().format("%d/%m/%Y").to_string(),
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_tokens() {
        let member = Member {
            nome_completo: "Ana Silva".into(),
            data_batismo: "2010-04-18".into(),
            ..Default::default()
        };
        let tokens = member_tokens(&member);

        let out = render_template("Certificamos que {nome}, batizada em {dataBatismo}.", &tokens);
        assert_eq!(out, "Certificamos que Ana Silva, batizada em 2010-04-18.");
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let tokens = member_tokens(&Member::default());
        let out = render_template("Olá {naoExiste}!", &tokens);
        assert_eq!(out, "Olá {naoExiste}!");
    }

    #[test]
    fn repeated_tokens_all_replaced() {
        let member = Member {
            nome_completo: "Ana".into(),
            ..Default::default()
        };
        let out = render_template("{nome} {nome}", &member_tokens(&member));
        assert_eq!(out, "Ana Ana");
    }
}
