use proc_macro::{Delimiter, Group, Ident, Punct, Spacing, Span, TokenStream, TokenTree};
use proc_macro2::{Span as Span2, TokenStream as TokenStream2, TokenTree as TokenTree2};
use quote::quote;
use std::iter::FromIterator;
use syn::{Error, Expr};

/// Chains applications written with the applicative `<*>` operator.
///
/// `ap!(f <*> a <*> b)` expands to `::elevated::apply(::elevated::apply(f, a), b)`,
/// associating to the left like the operator it stands in for.
#[proc_macro]
pub fn ap(body: TokenStream) -> TokenStream {
	match ap_chain(body.into()) {
		Ok(expanded) => expanded.into(),
		Err(error) => error.into_compile_error().into(),
	}
}

fn ap_chain(body: TokenStream2) -> syn::Result<TokenStream2> {
	let tokens: Vec<TokenTree2> = body.into_iter().collect();
	let mut operands = Vec::new();
	let mut operators = Vec::new();
	let mut current = Vec::new();

	let mut i = 0;
	while i < tokens.len() {
		if let Some(span) = ap_operator_at(&tokens[i..]) {
			operands.push(std::mem::take(&mut current));
			operators.push(span);
			i += 3;
		} else {
			current.push(tokens[i].clone());
			i += 1;
		}
	}
	operands.push(current);

	if operators.is_empty() {
		return Err(Error::new(
			Span2::call_site(),
			"expected at least one `<*>` in `ap!`",
		));
	}

	let mut operands = operands.into_iter();
	let first = parse_operand(operands.next().unwrap_or_default(), operators[0], "before")?;
	let mut chain = quote!(#first);
	for (operand, span) in operands.zip(operators) {
		let operand = parse_operand(operand, span, "after")?;
		chain = quote!(::elevated::apply(#chain, #operand));
	}
	Ok(chain)
}

/// Returns the span of a `<*>` starting at the head of `tokens`.
fn ap_operator_at(tokens: &[TokenTree2]) -> Option<Span2> {
	match tokens {
		[TokenTree2::Punct(lt), TokenTree2::Punct(star), TokenTree2::Punct(gt), ..]
			if lt.as_char() == '<'
				&& lt.spacing() == proc_macro2::Spacing::Joint
				&& star.as_char() == '*'
				&& star.spacing() == proc_macro2::Spacing::Joint
				&& gt.as_char() == '>' =>
		{
			Some(lt.span())
		}
		_ => None,
	}
}

fn parse_operand(tokens: Vec<TokenTree2>, operator: Span2, side: &str) -> syn::Result<Expr> {
	if tokens.is_empty() {
		return Err(Error::new(operator, format!("expected an operand {side} `<*>`")));
	}
	syn::parse2(TokenStream2::from_iter(tokens))
}

/// A macro that chains `let x <- outcome;` binds into `flat_map` calls.
///
/// Every statement after a bind ends up inside the closure passed to
/// `flat_map`, so a failure stops the rest of the block from running.
#[proc_macro]
pub fn do_notation(body: TokenStream) -> TokenStream {
	let mut tokens = body.into_iter();
	rewrite_block(&mut tokens)
}

fn rewrite_block<I: Iterator<Item = TokenTree>>(tokens: &mut I) -> TokenStream {
	let mut rewritten = TokenStream::new();
	while let Some(tt) = tokens.next() {
		let out_tt = match tt {
			TokenTree::Ident(i) if i.to_string() == "let" => rewrite_bind(tokens),
			TokenTree::Group(g) if g.delimiter() == Delimiter::Brace => {
				return Error::new(g.span().into(), "blocks cannot be used in do notation")
					.into_compile_error()
					.into()
			}
			_ => TokenStream::from(tt),
		};
		rewritten.extend(out_tt);
	}
	rewritten
}

fn rewrite_bind<I: Iterator<Item = TokenTree>>(tokens: &mut I) -> TokenStream {
	let (is_mut, ident) = match tokens.next() {
		Some(TokenTree::Ident(i)) if i.to_string() == "mut" => match tokens.next() {
			Some(TokenTree::Ident(ident)) => (true, ident),
			Some(tt) => return let_followed_by([TokenTree::Ident(i), tt]),
			None => return let_followed_by([TokenTree::Ident(i)]),
		},
		Some(TokenTree::Ident(i)) => (false, i),
		Some(tt) => return let_followed_by([tt]),
		None => return let_keyword(),
	};

	let arrow_span = match tokens.next() {
		Some(TokenTree::Punct(p)) if p.as_char() == '<' => match tokens.next() {
			Some(TokenTree::Punct(dash)) if dash.as_char() == '-' => dash.span(),
			Some(tt) => {
				return Error::new(tt.span().into(), format!("expected `-` found {tt}"))
					.into_compile_error()
					.into()
			}
			None => {
				return Error::new(p.span().into(), "unexpected end of do notation body")
					.into_compile_error()
					.into()
			}
		},
		Some(tt) => {
			let mut out = plain_let(is_mut, ident);
			out.extend(TokenStream::from(tt));
			return out;
		}
		None => return plain_let(is_mut, ident),
	};

	let mut bound_expr = Vec::new();
	for tt in tokens.by_ref() {
		match tt {
			TokenTree::Punct(p) if p.as_char() == ';' => break,
			_ => bound_expr.push(tt),
		}
	}

	let mut continuation = vec![TokenTree::Ident(Ident::new("move", Span::call_site()))];
	continuation.push(TokenTree::Punct(Punct::new('|', Spacing::Alone)));
	if is_mut {
		continuation.push(TokenTree::Ident(Ident::new("mut", Span::call_site())));
	}
	continuation.push(TokenTree::Ident(ident));
	continuation.push(TokenTree::Punct(Punct::new('|', Spacing::Alone)));
	continuation.push(TokenTree::Group(Group::new(
		Delimiter::Brace,
		rewrite_block(tokens),
	)));

	TokenStream::from_iter([
		TokenTree::Group(Group::new(
			Delimiter::Parenthesis,
			TokenStream::from_iter(bound_expr),
		)),
		TokenTree::Punct(Punct::new('.', Spacing::Alone)),
		TokenTree::Ident(Ident::new("flat_map", arrow_span)),
		TokenTree::Group(Group::new(
			Delimiter::Parenthesis,
			TokenStream::from_iter(continuation),
		)),
	])
}

fn let_followed_by<const N: usize>(tts: [TokenTree; N]) -> TokenStream {
	let mut out = let_keyword();
	out.extend(tts);
	out
}

fn let_keyword() -> TokenStream {
	TokenStream::from(TokenTree::Ident(Ident::new("let", Span::call_site())))
}

fn plain_let(is_mut: bool, ident: Ident) -> TokenStream {
	let mut out = let_keyword();
	if is_mut {
		out.extend(TokenStream::from(TokenTree::Ident(Ident::new(
			"mut",
			Span::call_site(),
		))));
	}
	out.extend(TokenStream::from(TokenTree::Ident(ident)));
	out
}
