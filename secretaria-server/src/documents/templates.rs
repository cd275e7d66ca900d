//! Built-in document templates
//!
//! Used whenever the secretariat has not saved custom text. Placeholders
//! follow the `{token}` vocabulary of [`super::renderer`].

use shared::models::TemplateSettings;

pub const CARTA_BATISMO: &str = "\
CARTA DE BATISMO

Certificamos, para os devidos fins, que {nome}, portador(a) do RG {rg} \
e CPF {cpf}, foi batizado(a) nas águas em {dataBatismo}, na {igrejaBatismo}.

{cidade}, {dataAtual}.

_______________________________
Pastor Presidente";

pub const CARTEIRINHA: &str = "\
CARTEIRINHA DE MEMBRO

Nome: {nome}
Cargo: {cargoMinisterial}
Data de Nascimento: {dataNascimento}
Batismo: {dataBatismo}
Emitida em: {dataAtual}";

pub const CONTRATO: &str = "\
TERMO DE COMPROMISSO

Eu, {nome}, {estadoCivil}, {profissao}, residente em {endereco}, \
{bairro}, {cidade}/{estado}, assumo o compromisso de membro desta igreja, \
zelando pela sã doutrina e pela comunhão do corpo.

{cidade}, {dataAtual}.

_______________________________
{nome}";

/// Saved settings with blanks filled from the built-in defaults
pub fn with_defaults(saved: Option<TemplateSettings>) -> TemplateSettings {
    let mut settings = saved.unwrap_or_default();
    if settings.carta_batismo.trim().is_empty() {
        settings.carta_batismo = CARTA_BATISMO.to_string();
    }
    if settings.carteirinha.trim().is_empty() {
        settings.carteirinha = CARTEIRINHA.to_string();
    }
    if settings.contrato.trim().is_empty() {
        settings.contrato = CONTRATO.to_string();
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_fall_back_to_defaults() {
        let settings = with_defaults(None);
        assert!(settings.carta_batismo.contains("{nome}"));

        let custom = with_defaults(Some(TemplateSettings {
            carteirinha: "Cartão de {nome}".into(),
            ..Default::default()
        }));
        assert_eq!(custom.carteirinha, "Cartão de {nome}");
        assert_eq!(custom.contrato, CONTRATO);
    }
}
